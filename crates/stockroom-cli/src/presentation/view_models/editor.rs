#[derive(Debug, Clone)]
pub struct EditorViewModel {
    pub title: String,
    pub fields: Vec<EditorFieldViewModel>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EditorFieldViewModel {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
    pub has_error: bool,
}
