use std::collections::HashSet;

use speech_relay::domain::ArtifactId;
use uuid::Uuid;

#[test]
fn given_many_new_ids_when_generated_then_all_are_distinct() {
    let ids: HashSet<ArtifactId> = (0..1000).map(|_| ArtifactId::new()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn given_uuid_when_wrapped_then_displays_as_uuid() {
    let uuid = Uuid::new_v4();
    let id = ArtifactId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
    assert_eq!(id.to_string(), uuid.to_string());
}
