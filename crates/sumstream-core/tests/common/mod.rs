pub mod readers;
