use std::io;

use bytes::{Bytes, BytesMut};
use futures::{StreamExt, stream};

use speech_relay::application::ports::{ScratchStore, ScratchStoreError};
use speech_relay::domain::ArtifactId;
use speech_relay::infrastructure::storage::LocalScratchStore;

use crate::helpers::scratch_file_count;

fn create_test_store() -> (tempfile::TempDir, LocalScratchStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalScratchStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

async fn read_back(store: &LocalScratchStore, id: &ArtifactId) -> Vec<u8> {
    let mut stream = store.open(id).await.unwrap();
    let mut buffer = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk.unwrap());
    }
    buffer.to_vec()
}

#[tokio::test]
async fn given_valid_stream_when_storing_then_byte_count_is_returned() {
    let (dir, store) = create_test_store();
    let id = ArtifactId::new();

    let chunks = vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];
    let size = store.store(&id, stream::iter(chunks).boxed()).await.unwrap();

    assert_eq!(size, 11);
    assert!(dir.path().join(id.to_string()).exists());
}

#[tokio::test]
async fn given_stored_file_when_opening_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let id = ArtifactId::new();

    let content = b"RIFF fake wav payload";
    let chunks = vec![Ok(Bytes::from_static(&content[..]))];
    store.store(&id, stream::iter(chunks).boxed()).await.unwrap();

    assert_eq!(read_back(&store, &id).await, content);
}

#[tokio::test]
async fn given_empty_upload_when_storing_then_zero_byte_file_is_kept() {
    let (_dir, store) = create_test_store();
    let id = ArtifactId::new();

    let size = store
        .store(&id, stream::iter(Vec::<io::Result<Bytes>>::new()).boxed())
        .await
        .unwrap();

    assert_eq!(size, 0);
    assert!(read_back(&store, &id).await.is_empty());
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_file_is_gone_from_disk() {
    let (dir, store) = create_test_store();
    let id = ArtifactId::new();

    let chunks = vec![Ok(Bytes::from("data"))];
    store.store(&id, stream::iter(chunks).boxed()).await.unwrap();
    store.delete(&id).await.unwrap();

    assert_eq!(scratch_file_count(dir.path()), 0);
    assert!(matches!(
        store.open(&id).await,
        Err(ScratchStoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_two_artifacts_when_deleting_one_then_other_survives() {
    let (dir, store) = create_test_store();
    let first = ArtifactId::new();
    let second = ArtifactId::new();

    store
        .store(&first, stream::iter(vec![Ok(Bytes::from("a"))]).boxed())
        .await
        .unwrap();
    store
        .store(&second, stream::iter(vec![Ok(Bytes::from("b"))]).boxed())
        .await
        .unwrap();
    store.delete(&first).await.unwrap();

    assert_eq!(scratch_file_count(dir.path()), 1);
    assert_eq!(read_back(&store, &second).await, b"b");
}

#[tokio::test]
async fn given_stream_error_when_storing_then_returns_error_and_leaves_no_file() {
    let (dir, store) = create_test_store();
    let id = ArtifactId::new();

    let chunks = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away")),
    ];
    let result = store.store(&id, stream::iter(chunks).boxed()).await;

    assert!(matches!(result, Err(ScratchStoreError::Io(_))));
    assert_eq!(scratch_file_count(dir.path()), 0);
}
