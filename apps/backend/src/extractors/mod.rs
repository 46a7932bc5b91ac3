pub mod current_user;
pub mod room_key;
pub mod validated_json;
