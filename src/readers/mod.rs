pub mod corpus_scanner;
pub mod record_parser;

pub use corpus_scanner::{CorpusIter, CorpusScanner};
pub use record_parser::{ParsedRecord, RecordParser};
