pub mod match_record;
