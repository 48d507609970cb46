use crate::*;
use rstest::fixture;

/// The `chats` table most tests run against.
#[fixture]
pub fn chats() -> Model {
    Model::define(
        "chats",
        [
            Field::new("id", "integer").postfix("PRIMARY KEY"),
            Field::new("type", "text"),
            Field::new("last_name", "text"),
            Field::new("first_name", "text"),
            Field::new("username", "text"),
        ],
    )
    .expect("chats model should define")
}

/// A chat row without an id.
#[fixture]
pub fn vouk() -> Instance {
    Instance::new()
        .with("type", "usual")
        .with("last_name", "Vouk")
        .with("first_name", "Ilya")
        .with("username", "voilalex")
}
