//! Tests for `WebhookDispatcher`.

use super::dispatcher::{Dispatch, WebhookDispatcher, build_request};
use super::test_support::{MockClient, RecordingReporter};
use super::{ApiKey, Category, HttpError, HttpResponse, Payload};
use url::Url;

fn death_url() -> Url {
    Url::parse("https://hooks.example/death").unwrap()
}

fn key() -> ApiKey {
    ApiKey::new("K1").unwrap()
}

fn payload() -> Payload {
    Payload::new().with("name", "Victim").with("id", "77")
}

fn dispatcher(client: MockClient) -> WebhookDispatcher<MockClient, RecordingReporter> {
    WebhookDispatcher::new(client, tokio::runtime::Handle::current())
        .with_reporter(RecordingReporter::default())
}

mod guard_clauses {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_sends_nothing() {
        let dispatcher = dispatcher(MockClient::default());

        let outcome = dispatcher.dispatch(Category::PlayerDeath, Some(&death_url()), None, &payload());

        assert!(matches!(outcome, Dispatch::MissingApiKey));
        outcome.finished().await;
        assert_eq!(dispatcher.client().calls(), 0);
        assert_eq!(dispatcher.reporter().lines(), vec!["ApiKey is not configured"]);
    }

    #[tokio::test]
    async fn empty_api_key_counts_as_missing() {
        let dispatcher = dispatcher(MockClient::default());
        let empty = ApiKey::new("").unwrap();

        let outcome = dispatcher.dispatch(
            Category::PlayerDeath,
            Some(&death_url()),
            Some(&empty),
            &payload(),
        );

        assert!(matches!(outcome, Dispatch::MissingApiKey));
        assert_eq!(dispatcher.client().calls(), 0);
        assert_eq!(dispatcher.reporter().lines(), vec!["ApiKey is not configured"]);
    }

    #[tokio::test]
    async fn api_key_checked_before_url() {
        let dispatcher = dispatcher(MockClient::default());

        let outcome = dispatcher.dispatch(Category::PlayerLoot, None, None, &payload());

        assert!(matches!(outcome, Dispatch::MissingApiKey));
        assert_eq!(dispatcher.reporter().lines(), vec!["ApiKey is not configured"]);
    }

    #[tokio::test]
    async fn missing_url_sends_nothing_and_names_category() {
        let dispatcher = dispatcher(MockClient::default());

        let outcome = dispatcher.dispatch(Category::PlayerLoot, None, Some(&key()), &payload());

        assert!(matches!(outcome, Dispatch::MissingUrl(Category::PlayerLoot)));
        outcome.finished().await;
        assert_eq!(dispatcher.client().calls(), 0);
        assert_eq!(
            dispatcher.reporter().lines(),
            vec!["PlayerLoot is not configured"]
        );
    }
}

mod delivery {
    use super::*;

    #[tokio::test]
    async fn sends_one_post_with_authorization_and_encoded_body() {
        let dispatcher = dispatcher(MockClient::default());

        let outcome =
            dispatcher.dispatch(Category::PlayerDeath, Some(&death_url()), Some(&key()), &payload());

        assert!(outcome.is_in_flight());
        outcome.finished().await;

        let requests = dispatcher.client().captured_requests();
        assert_eq!(requests.len(), 1);

        let req = &requests[0];
        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, death_url());
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.headers[http::header::AUTHORIZATION], "K1");
        assert_eq!(req.body, "name=Victim&id=77");
    }

    #[tokio::test]
    async fn completion_line_has_category_and_status() {
        let dispatcher = dispatcher(MockClient::with_status(http::StatusCode::CREATED));

        dispatcher
            .dispatch(Category::PlayerKill, Some(&death_url()), Some(&key()), &payload())
            .finished()
            .await;

        assert_eq!(dispatcher.reporter().lines(), vec!["PlayerKill(Status:201)"]);
    }

    #[tokio::test]
    async fn non_success_status_is_logged_without_retry() {
        let dispatcher = dispatcher(MockClient::with_status(
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ));

        dispatcher
            .dispatch(Category::PlayerLogin, Some(&death_url()), Some(&key()), &payload())
            .finished()
            .await;

        assert_eq!(dispatcher.client().calls(), 1);
        assert_eq!(dispatcher.reporter().lines(), vec!["PlayerLogin(Status:500)"]);
    }

    #[tokio::test]
    async fn transport_failure_is_logged_without_retry() {
        let dispatcher = dispatcher(MockClient::new(vec![Err(HttpError::Timeout)]));

        dispatcher
            .dispatch(Category::EntityDestroyed, Some(&death_url()), Some(&key()), &payload())
            .finished()
            .await;

        assert_eq!(dispatcher.client().calls(), 1);
        assert_eq!(
            dispatcher.reporter().lines(),
            vec!["EntityDestroyed(Error:Request timed out)"]
        );
    }

    #[tokio::test]
    async fn dispatches_are_independent() {
        let dispatcher = dispatcher(MockClient::new(vec![
            Ok(HttpResponse::new(http::StatusCode::OK)),
            Ok(HttpResponse::new(http::StatusCode::BAD_GATEWAY)),
        ]));

        let first = dispatcher.dispatch(
            Category::PlayerDeath,
            Some(&death_url()),
            Some(&key()),
            &Payload::new().with("n", "1"),
        );
        first.finished().await;
        let second = dispatcher.dispatch(
            Category::PlayerDeath,
            Some(&death_url()),
            Some(&key()),
            &Payload::new().with("n", "2"),
        );
        second.finished().await;

        let bodies: Vec<_> = dispatcher
            .client()
            .captured_requests()
            .into_iter()
            .map(|r| r.body)
            .collect();
        assert_eq!(bodies, vec!["n=1", "n=2"]);
        assert_eq!(
            dispatcher.reporter().lines(),
            vec!["PlayerDeath(Status:200)", "PlayerDeath(Status:502)"]
        );
    }

    #[tokio::test]
    async fn dispatch_returns_before_request_runs() {
        let dispatcher = dispatcher(MockClient::default());

        // Current-thread runtime: the spawned task cannot run until we yield.
        let outcome =
            dispatcher.dispatch(Category::PlayerDeath, Some(&death_url()), Some(&key()), &payload());
        assert!(outcome.is_in_flight());
        assert_eq!(dispatcher.client().calls(), 0);
        assert!(dispatcher.reporter().lines().is_empty());

        outcome.finished().await;
        assert_eq!(dispatcher.client().calls(), 1);
    }
}

mod dry_run {
    use super::*;

    #[tokio::test]
    async fn builds_but_does_not_send() {
        let dispatcher = dispatcher(MockClient::default()).with_dry_run(true);

        let outcome =
            dispatcher.dispatch(Category::PlayerLogin, Some(&death_url()), Some(&key()), &payload());

        assert!(matches!(outcome, Dispatch::DryRun));
        assert!(dispatcher.is_dry_run());
        assert_eq!(dispatcher.client().calls(), 0);
        assert_eq!(
            dispatcher.reporter().lines(),
            vec!["PlayerLogin dry-run: name=Victim&id=77"]
        );
    }

    #[tokio::test]
    async fn guard_clauses_still_apply() {
        let dispatcher = dispatcher(MockClient::default()).with_dry_run(true);

        let outcome = dispatcher.dispatch(Category::PlayerLogin, None, Some(&key()), &payload());

        assert!(matches!(outcome, Dispatch::MissingUrl(Category::PlayerLogin)));
    }
}

mod request_building {
    use super::*;

    #[test]
    fn empty_payload_builds_empty_body() {
        let req = build_request(&death_url(), &key(), &Payload::new());
        assert_eq!(req.body, "");
        assert_eq!(req.headers[http::header::AUTHORIZATION], "K1");
    }

    #[test]
    fn key_is_not_given_a_scheme_prefix() {
        let key = ApiKey::new("Token abc").unwrap();
        let req = build_request(&death_url(), &key, &payload());
        assert_eq!(req.headers[http::header::AUTHORIZATION], "Token abc");
    }
}
