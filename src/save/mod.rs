mod codec;
mod keys;
mod model;
mod store;

pub use codec::{
    export_store, export_to_base64, import_from_base64, import_into_store, load_from_json_string,
    save_to_json_string,
};
pub use keys::SaveKey;
pub use model::{SAVE_VERSION, SaveData};
pub use store::{FileStore, MemoryStore, Store};
