pub mod participant_reader;
pub mod payment_writer;
