pub mod json_encoder;
