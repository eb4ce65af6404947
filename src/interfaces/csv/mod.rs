pub mod request_reader;
pub mod token_writer;
