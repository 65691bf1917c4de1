use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let test_app = spawn_app().await;

    let response = reqwest::get(format!("{}/health_check", test_app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(Some(0), response.content_length());
}
