mod response;

pub use response::{map_cmd_result_to_json, print_error, print_json_result, print_raw};
