pub mod client;
pub mod consts;
pub mod data_uri;
pub mod density;
pub mod error;
pub mod geometry;
pub mod options;
pub mod panel;
pub mod prefs;
pub mod render;
pub mod request;
pub mod tabs;
pub mod theme;
pub mod tooltip;
pub mod view;
pub mod viewer;
