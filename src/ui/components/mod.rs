pub mod player;
pub mod prompt;
pub mod sidebar;
pub mod song_list;
pub mod status;
