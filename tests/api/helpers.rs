use std::sync::LazyLock;

use fake::Fake;
use newsletter_api::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "debug".to_string();
    let subscriber_name = "test".to_string();
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            init_subscriber(subscriber);
        }
    }
});

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub db_pool: sqlx::SqlitePool,
}

impl TestApp {
    pub async fn get_index(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_newsletters(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/newsletters", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_newsletter(&self, form: &[(&str, &str)]) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/newsletters", self.address))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_newsletter(&self, id: i64) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/newsletters/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_newsletter(&self, id: i64, form: &[(&str, &str)]) -> reqwest::Response {
        reqwest::Client::new()
            .patch(format!("{}/newsletters/{}", self.address, id))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_newsletter(&self, id: i64) -> reqwest::Response {
        reqwest::Client::new()
            .delete(format!("{}/newsletters/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Creates a record through the API and returns its id.
    pub async fn seed_newsletter(&self, title: &str, body: &str) -> i64 {
        let response = self.post_newsletter(&[("title", title), ("body", body)]).await;
        assert_eq!(201, response.status().as_u16());
        let created: serde_json::Value = response.json().await.expect("Failed to parse body");
        created["id"].as_i64().expect("id missing in create response")
    }
}

pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // every test gets its own throwaway database file
        c.database.path = std::env::temp_dir().join(format!(
            "newsletters-test-{}.db",
            uuid::Uuid::new_v4().simple()
        ));
        c.database.create_if_missing = true;
        c.application.port = 0;
        c
    };

    let app = Application::build(&configuration)
        .await
        .expect("Failed to build the test application");
    let address = format!("http://127.0.0.1:{}", app.port());
    let db_pool = app.db_pool().clone();

    tokio::spawn(app.run());

    TestApp { address, db_pool }
}

pub fn random_title() -> String {
    fake::faker::lorem::en::Sentence(1..4).fake()
}

pub fn random_body() -> String {
    fake::faker::lorem::en::Paragraph(1..3).fake()
}
