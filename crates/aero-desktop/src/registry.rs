//! Built-in application registry.

use crate::geometry::WindowBounds;
use crate::window::AppDefinition;

/// The applications available on a fresh desktop.
pub fn default_apps() -> Vec<AppDefinition> {
    vec![
        AppDefinition {
            id: String::from("term"),
            title: String::from("Terminal"),
            renderable: String::from("terminal"),
            default_bounds: Some(WindowBounds::new(50.0, 50.0, 600.0, 400.0)),
        },
        AppDefinition {
            id: String::from("taskmgr"),
            title: String::from("Task Manager"),
            renderable: String::from("task_manager"),
            default_bounds: Some(WindowBounds::new(100.0, 100.0, 600.0, 400.0)),
        },
        AppDefinition {
            id: String::from("explorer"),
            title: String::from("File Manager"),
            renderable: String::from("file_manager"),
            default_bounds: Some(WindowBounds::new(150.0, 150.0, 800.0, 500.0)),
        },
        AppDefinition {
            id: String::from("browser"),
            title: String::from("Aero Browser"),
            renderable: String::from("browser"),
            default_bounds: Some(WindowBounds::new(100.0, 60.0, 900.0, 600.0)),
        },
    ]
}
