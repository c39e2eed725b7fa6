pub mod file_reader_service;
pub mod file_writer_service;

pub use file_reader_service::FileReaderService;
pub use file_writer_service::FileWriterService;
