/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("ranker {ranker} returned {actual} scores for a corpus of {expected}")]
    MisalignedScores {
        ranker: String,
        expected: usize,
        actual: usize,
    },
}
