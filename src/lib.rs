pub mod core;
pub mod data;
pub mod model;
pub mod save;
pub mod text;
pub mod ui;

pub use crate::core::{
    AccrualLoop, GameController, LoopTick, NotifySlot, SessionPhase, SessionState, TickReport,
};
pub use data::{
    Catalogs, GameConfig, PartDefinition, load_catalogs, load_catalogs_from_path,
    load_config_from_path,
};
pub use model::{PartIndex, PartSlot, PopupEntry, PopupItem};
pub use save::{
    FileStore, MemoryStore, SAVE_VERSION, SaveData, SaveKey, Store, export_store,
    export_to_base64, import_from_base64, import_into_store, load_from_json_string,
    save_to_json_string,
};
pub use ui::{DialogKind, GameEvent, Screen, ScreenModel, StatusReadout, UiCommand, View};
