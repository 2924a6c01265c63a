pub mod json_api;

pub use json_api::{
    compare_alignments, compare_alignments_json, generate_protractor, generate_protractor_json,
    AlignmentReport, AlignmentSelector, CompareRequest, ProtractorRequest, ProtractorResponse,
};
