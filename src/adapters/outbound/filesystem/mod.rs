/// Filesystem adapters for file I/O operations
mod catalogue_file_reader;

pub use catalogue_file_reader::FileSystemCatalogueReader;
