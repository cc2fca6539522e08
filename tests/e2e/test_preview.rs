use crate::e2e::helpers;

use helpers::api_client::MultipartForm;
use helpers::fixtures::TestFixtures;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

fn three_page_pdf() -> Vec<u8> {
    TestFixtures::pdf_with_pages(&["Hello", "World", "!"]).unwrap()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_preview_a_two_page_spread(ctx: &TestContext) {
    let form = MultipartForm::new()
        .file("book.pdf", three_page_pdf())
        .text("page", "1");

    let response = ctx
        .client
        .post_multipart("/api/documents/preview", &form)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.clone().unwrap(),
        json!({
            "filename": "book.pdf",
            "kind": "pdf",
            "page_count": 3,
            "pages": [
                { "number": 1, "text": "Hello" },
                { "number": 2, "text": "World" }
            ]
        })
    );
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_preview_only_the_last_page_at_the_end(ctx: &TestContext) {
    let form = MultipartForm::new()
        .file("book.pdf", three_page_pdf())
        .text("page", "3");

    let response = ctx
        .client
        .post_multipart("/api/documents/preview", &form)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let pages = response.body.as_ref().unwrap()["pages"].as_array().unwrap().clone();
    assert_eq!(pages, vec![json!({ "number": 3, "text": "!" })]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_to_the_first_page(ctx: &TestContext) {
    let form = MultipartForm::new().file("book.pdf", three_page_pdf());

    let response = ctx
        .client
        .post_multipart("/api/documents/preview", &form)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["pages"][0]["number"], json!(1));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_preview_page_out_of_range(ctx: &TestContext) {
    let form = MultipartForm::new()
        .file("book.pdf", three_page_pdf())
        .text("page", "4");

    let response = ctx
        .client
        .post_multipart("/api/documents/preview", &form)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid page number. Please choose a page between 1 and 3.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_pdf_without_pages(ctx: &TestContext) {
    let form = MultipartForm::new().file("empty.pdf", TestFixtures::pdf_with_pages(&[]).unwrap());

    let response = ctx
        .client
        .post_multipart("/api/documents/preview", &form)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("No pages found in the PDF.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_preview_whole_docx_text(ctx: &TestContext) {
    let docx = TestFixtures::docx_with_paragraphs(&["Title", "", "Body text"]).unwrap();
    let form = MultipartForm::new().file("essay.docx", docx);

    let response = ctx
        .client
        .post_multipart("/api/documents/preview", &form)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.clone().unwrap(),
        json!({
            "filename": "essay.docx",
            "kind": "docx",
            "text": "Title\n\nBody text"
        })
    );
}
