pub mod searching;
pub mod consts;
pub mod board_handles;

pub mod evaluation;

pub mod prelude {
    // easier exporting
    pub use super::board_handles;
    pub use super::consts;
    pub use super::evaluation;
    pub use super::searching;
}
