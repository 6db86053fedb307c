use serde_json;
use serde::{Serialize, Deserialize};
use crate::error::Errno;

pub fn encode_to_str<T: Serialize + ?Sized> (p: &T) -> Result<String, Errno> {
    match serde_json::to_string(p) {
        Ok(body) => {
            return Ok(body);
        }
        Err(error) => {
            return Err(Errno::Ejson(format!("encode_to_str failed with err: {}", error)));
        }
    }
}

pub fn decode_from_str<'a, T: Deserialize<'a>> (body: &'a str) -> Result<T, Errno>{
    match serde_json::from_str(body) {
        Ok(p) => {
            return Ok(p);
        }
        Err(error) => {
            return Err(Errno::Ejson(format!("decode_from_str failed with err: {}", error)));
        }
    }
}
