mod text_generator_http;

pub use text_generator_http::HttpTextGenerator;
