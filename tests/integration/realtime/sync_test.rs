//! Sync protocol integration tests
//!
//! Drive a real relay over WebSockets with hand-written JSON frames.

#[cfg(all(feature = "server", feature = "client"))]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    use crate::common::*;
    use warroom::shared::CollectionName;

    const QUIET: Duration = Duration::from_millis(200);

    #[tokio::test]
    async fn test_new_connection_is_hydrated_with_every_collection() {
        let server = TestServer::start().await;
        let (_socket, data) = connect_hydrated(&server).await;

        let object = data.as_object().unwrap();
        assert_eq!(object.len(), CollectionName::ALL.len());
        for name in CollectionName::ALL {
            assert_eq!(data[name.as_str()], json!([]), "{} should start empty", name);
        }
    }

    #[tokio::test]
    async fn test_upsert_then_replace_reaches_every_client() {
        let server = TestServer::start().await;
        let (mut alice, _) = connect_hydrated(&server).await;
        let (mut bob, _) = connect_hydrated(&server).await;

        send_json(
            &mut alice,
            json!({"type": "sync", "collection": "tasks", "data": {"id": "1", "title": "x"}}),
        )
        .await;

        let expected = json!({"type": "sync", "collection": "tasks", "data": [{"id": "1", "title": "x"}]});
        assert_eq!(next_frame(&mut alice).await, expected);
        assert_eq!(next_frame(&mut bob).await, expected);

        send_json(&mut alice, json!({"type": "sync", "collection": "tasks", "data": []})).await;

        let expected = json!({"type": "sync", "collection": "tasks", "data": []});
        assert_eq!(next_frame(&mut alice).await, expected);
        assert_eq!(next_frame(&mut bob).await, expected);
    }

    #[tokio::test]
    async fn test_upsert_of_existing_id_keeps_position() {
        let server = TestServer::start().await;
        let (mut socket, _) = connect_hydrated(&server).await;

        send_json(
            &mut socket,
            json!({"type": "sync", "collection": "notes", "data": [{"id": "a", "v": 1}, {"id": "b", "v": 1}]}),
        )
        .await;
        next_frame(&mut socket).await;

        send_json(
            &mut socket,
            json!({"type": "sync", "collection": "notes", "data": {"id": "a", "v": 2}}),
        )
        .await;
        let frame = next_frame(&mut socket).await;
        assert_eq!(frame["data"], json!([{"id": "a", "v": 2}, {"id": "b", "v": 1}]));

        send_json(
            &mut socket,
            json!({"type": "sync", "collection": "notes", "data": {"id": "c", "v": 1}}),
        )
        .await;
        let frame = next_frame(&mut socket).await;
        assert_eq!(frame["data"][2], json!({"id": "c", "v": 1}));
    }

    #[tokio::test]
    async fn test_string_and_numeric_ids_are_distinct() {
        let server = TestServer::start().await;
        let (mut socket, _) = connect_hydrated(&server).await;

        send_json(&mut socket, json!({"type": "sync", "collection": "habits", "data": {"id": 7}})).await;
        next_frame(&mut socket).await;
        send_json(&mut socket, json!({"type": "sync", "collection": "habits", "data": {"id": "7"}})).await;

        let frame = next_frame(&mut socket).await;
        assert_eq!(frame["data"], json!([{"id": 7}, {"id": "7"}]));
    }

    #[tokio::test]
    async fn test_invalid_frames_are_discarded_silently() {
        let server = TestServer::start().await;
        let (mut alice, _) = connect_hydrated(&server).await;
        let (mut bob, _) = connect_hydrated(&server).await;

        send_text(&mut alice, "this is not json").await;
        send_json(&mut alice, json!({"type": "delete", "collection": "tasks", "data": []})).await;
        send_json(&mut alice, json!({"type": "sync", "collection": "grades", "data": []})).await;
        send_json(&mut alice, json!({"type": "sync", "collection": "tasks"})).await;
        send_json(&mut alice, json!({"type": "sync", "collection": "tasks", "data": null})).await;

        assert_silent(&mut bob, QUIET).await;

        // The sender's connection survives and the next valid frame goes through.
        send_json(&mut alice, json!({"type": "sync", "collection": "calendar", "data": [{"id": 1}]})).await;
        let frame = next_frame(&mut bob).await;
        assert_eq!(frame["collection"], "calendar");
        assert_eq!(next_frame(&mut alice).await, frame);
    }

    #[tokio::test]
    async fn test_record_without_id_is_appended() {
        let server = TestServer::start().await;
        let (mut socket, _) = connect_hydrated(&server).await;

        send_json(
            &mut socket,
            json!({"type": "sync", "collection": "chat", "data": {"text": "hi", "senderId": "AV"}}),
        )
        .await;
        let frame = next_frame(&mut socket).await;
        assert_eq!(frame["data"], json!([{"text": "hi", "senderId": "AV"}]));
    }

    #[tokio::test]
    async fn test_late_joiner_sees_current_state() {
        let server = TestServer::start().await;
        let (mut early, _) = connect_hydrated(&server).await;

        send_json(&mut early, json!({"type": "sync", "collection": "journal", "data": {"id": "j1", "mood": 4}})).await;
        next_frame(&mut early).await;

        let (_late, data) = connect_hydrated(&server).await;
        assert_eq!(data["journal"], json!([{"id": "j1", "mood": 4}]));
        assert_eq!(data["tasks"], json!([]));
    }

    #[tokio::test]
    async fn test_last_applied_write_wins_everywhere() {
        let server = TestServer::start().await;
        let (mut alice, _) = connect_hydrated(&server).await;
        let (mut bob, _) = connect_hydrated(&server).await;

        // Both propose at once; the relay orders them.
        send_json(&mut alice, json!({"type": "sync", "collection": "resources", "data": [{"id": "from-alice"}]})).await;
        send_json(&mut bob, json!({"type": "sync", "collection": "resources", "data": [{"id": "from-bob"}]})).await;

        let alice_frames = [next_frame(&mut alice).await, next_frame(&mut alice).await];
        let bob_frames = [next_frame(&mut bob).await, next_frame(&mut bob).await];
        assert_eq!(alice_frames, bob_frames, "every client sees the same order");

        let (_observer, data) = connect_hydrated(&server).await;
        assert_eq!(data["resources"], alice_frames[1]["data"]);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_invalid_records() {
        let server = TestServer::strict().await;
        let (mut socket, _) = connect_hydrated(&server).await;

        send_json(&mut socket, json!({"type": "sync", "collection": "tasks", "data": {"id": "1", "title": "x"}})).await;
        assert_silent(&mut socket, QUIET).await;

        let task = json!({"id": "1", "title": "Revise", "priority": "high", "status": "in-progress", "extra": true});
        send_json(&mut socket, json!({"type": "sync", "collection": "tasks", "data": task.clone()})).await;
        let frame = next_frame(&mut socket).await;
        assert_eq!(frame["data"], json!([task]));
    }

    #[tokio::test]
    async fn test_closing_one_client_does_not_affect_others() {
        let server = TestServer::start().await;
        let (alice, _) = connect_hydrated(&server).await;
        let (mut bob, _) = connect_hydrated(&server).await;
        drop(alice);

        send_json(&mut bob, json!({"type": "sync", "collection": "pact", "data": [{"id": 1}]})).await;
        let frame = next_frame(&mut bob).await;
        assert_eq!(frame["data"], json!([{"id": 1}]));
    }
}
