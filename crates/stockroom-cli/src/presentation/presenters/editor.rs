use stockroom_runtime::{EditForm, FormField, FormMode};

use crate::presentation::view_models::{EditorFieldViewModel, EditorViewModel};

pub fn present_editor(form: &EditForm) -> EditorViewModel {
    let title = match form.mode() {
        FormMode::Create => "Add product".to_string(),
        FormMode::Edit(id) => format!("Edit product #{}", id),
    };

    let errors = form.errors();
    let fields = FormField::ALL
        .iter()
        .map(|&field| EditorFieldViewModel {
            label: field.label().to_string(),
            value: form.value(field).to_string(),
            is_focused: form.focused() == field,
            has_error: errors.for_field(field).is_some(),
        })
        .collect();

    EditorViewModel {
        title,
        fields,
        errors: errors.errors.iter().map(|e| e.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_testing::sample_catalog;

    #[test]
    fn test_create_form() {
        let vm = present_editor(&EditForm::create());

        assert_eq!(vm.title, "Add product");
        assert_eq!(vm.fields.len(), 6);
        assert!(vm.fields[0].is_focused);
        assert_eq!(vm.fields[3].value, "0");
        assert!(vm.errors.is_empty());
    }

    #[test]
    fn test_edit_form_shows_errors() {
        let products = sample_catalog();
        let mut form = EditForm::edit(&products[2]);
        form.set_field(FormField::Name, "  ");
        form.set_field(FormField::Price, "cheap");
        form.focus_next();
        assert!(form.submit().is_err());

        let vm = present_editor(&form);

        assert_eq!(vm.title, "Edit product #3");
        assert!(vm.fields[0].has_error);
        assert!(vm.fields[1].is_focused);
        assert!(vm.fields[4].has_error);
        assert_eq!(
            vm.errors,
            vec!["Product name is required", "Price ($) must be a number"]
        );
    }
}
