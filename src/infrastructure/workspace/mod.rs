mod temp_workspace;

pub use temp_workspace::TempWorkspace;
