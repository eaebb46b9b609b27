pub mod dataset;
pub mod error;

pub use dataset::{Dataset, Question, Subject};
pub use error::NotFound;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages() {
        let missing = NotFound::Subject("db".to_string());
        assert_eq!(missing.to_string(), "subject not found: db");
        assert_eq!(missing.id(), "db");
        assert_eq!(
            NotFound::Question("q7".to_string()).to_string(),
            "question not found: q7"
        );
    }
}
