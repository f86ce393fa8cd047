use super::*;

mod library_operations;
mod paper_retrieval;
