use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub(crate) enum TillError {
    #[display("{name} is not on the menu")]
    UnknownItem { name: String },
}
