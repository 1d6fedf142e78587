//! Client binding against a real relay

#[cfg(all(feature = "server", feature = "client"))]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use tokio::sync::watch;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use crate::common::*;
    use warroom::client::{ClientConfig, CollectionBinding, ConnectionState};
    use warroom::shared::{CollectionName, Record};

    fn config_for(server: &TestServer) -> ClientConfig {
        ClientConfig::builder().server_url(server.ws_url()).build().unwrap()
    }

    /// Wait until the mirror satisfies `done`
    async fn wait_until<F>(mut rx: watch::Receiver<Vec<Record>>, done: F) -> Vec<Record>
    where
        F: Fn(&[Record]) -> bool,
    {
        timeout(Duration::from_secs(5), async {
            loop {
                {
                    let current = rx.borrow_and_update();
                    if done(&current) {
                        return current.clone();
                    }
                }
                rx.changed().await.unwrap();
            }
        })
        .await
        .expect("mirror never reached the expected state")
    }

    #[tokio::test]
    async fn test_mirror_follows_relay() {
        let server = TestServer::start().await;
        let config = config_for(&server);

        let writer = CollectionBinding::connect(&config, CollectionName::Tasks).await.unwrap();
        let reader = CollectionBinding::connect(&config, CollectionName::Tasks).await.unwrap();

        assert!(writer.propose_upsert(Record::new(json!({"id": "1", "title": "x"}))));

        let seen = wait_until(reader.subscribe(), |records| records.len() == 1).await;
        assert_eq!(seen, vec![Record::new(json!({"id": "1", "title": "x"}))]);

        // The sender's own mirror waits for the echo too.
        wait_until(writer.subscribe(), |records| records.len() == 1).await;

        assert!(writer.propose_replace(Vec::new()));
        wait_until(reader.subscribe(), |records| records.is_empty()).await;
    }

    #[tokio::test]
    async fn test_bindings_ignore_other_collections() {
        let server = TestServer::start().await;
        let config = config_for(&server);

        let notes = CollectionBinding::connect(&config, CollectionName::Notes).await.unwrap();
        let habits = CollectionBinding::connect(&config, CollectionName::Habits).await.unwrap();

        habits.propose_upsert(Record::new(json!({"id": "h1"})));
        wait_until(habits.subscribe(), |records| records.len() == 1).await;

        notes.propose_upsert(Record::new(json!({"id": "n1"})));
        let seen = wait_until(notes.subscribe(), |records| records.len() == 1).await;
        assert_eq!(seen[0].as_value(), &json!({"id": "n1"}));
        assert_eq!(habits.current().len(), 1);
    }

    #[tokio::test]
    async fn test_hydration_replaces_placeholder() {
        let server = TestServer::start().await;
        let config = config_for(&server);

        let seed = CollectionBinding::connect(&config, CollectionName::Calendar).await.unwrap();
        seed.propose_upsert(Record::new(json!({"id": 1, "title": "Exam"})));
        wait_until(seed.subscribe(), |records| records.len() == 1).await;

        let placeholder = vec![Record::new(json!({"id": "loading"})), Record::new(json!({"id": "loading-2"}))];
        let binding =
            CollectionBinding::connect_with_placeholder(&config, CollectionName::Calendar, placeholder)
                .await
                .unwrap();

        let seen = wait_until(binding.subscribe(), |records| records.len() == 1).await;
        assert_eq!(seen[0].as_value(), &json!({"id": 1, "title": "Exam"}));
    }

    #[tokio::test]
    async fn test_changes_stream_yields_current_then_updates() {
        let server = TestServer::start().await;
        let config = config_for(&server);
        let binding = CollectionBinding::connect(&config, CollectionName::Chat).await.unwrap();
        wait_until(binding.subscribe(), |records| records.is_empty()).await;

        let mut changes = binding.changes();
        let first = timeout(Duration::from_secs(5), changes.next()).await.unwrap().unwrap();
        assert!(first.is_empty());

        binding.propose_upsert(Record::new(json!({"id": "m1", "text": "hi"})));
        let next = timeout(Duration::from_secs(5), async {
            loop {
                let value = changes.next().await.unwrap();
                if !value.is_empty() {
                    return value;
                }
            }
        })
        .await
        .unwrap();
        assert_eq!(next.len(), 1);
    }

    #[tokio::test]
    async fn test_closed_binding_drops_proposals() {
        let server = TestServer::start().await;
        let config = config_for(&server);

        let closed = CollectionBinding::connect(&config, CollectionName::Resources).await.unwrap();
        let (mut observer, _) = connect_hydrated(&server).await;

        closed.close();
        assert_eq!(closed.state(), ConnectionState::Closed);
        assert!(!closed.propose_upsert(Record::new(json!({"id": "r1"}))));

        assert_silent(&mut observer, Duration::from_millis(200)).await;
    }
}
