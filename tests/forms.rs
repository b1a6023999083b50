use coursebuilder::forms::{LinkField, LinkForm, ModuleForm, RenameForm, TextInput, UploadForm};

fn type_into(input: &mut TextInput, text: &str) {
    for c in text.chars() {
        input.insert(c);
    }
}

#[test]
fn test_module_form_refuses_blank_names() {
    let mut form = ModuleForm::default();
    assert_eq!(form.submit(), None);

    type_into(&mut form.name, "   ");
    assert_eq!(form.submit(), None, "whitespace-only names are refused");

    form.name.clear();
    type_into(&mut form.name, "  Week 1 ");
    assert_eq!(form.submit(), Some("Week 1".to_string()));
}

#[test]
fn test_link_form_requires_both_fields() {
    let mut form = LinkForm::default();
    assert_eq!(form.focus, LinkField::Name);

    type_into(form.focused_mut(), "Docs");
    assert!(form.submit().is_none(), "URL is still empty");

    form.toggle_focus();
    assert_eq!(form.focus, LinkField::Url);
    type_into(form.focused_mut(), " https://docs.rs ");

    let draft = form.submit().expect("both fields are filled");
    assert_eq!(draft.name, "Docs");
    assert_eq!(draft.url, "https://docs.rs");
}

#[test]
fn test_link_form_accepts_any_url_text() {
    let form = LinkForm::editing("Notes", "not a url");
    assert_eq!(form.submit().map(|d| d.url), Some("not a url".to_string()));
}

#[test]
fn test_editing_link_form_is_prefilled() {
    let mut form = LinkForm::editing("Docs", "https://docs.rs");
    assert_eq!(form.name.value(), "Docs");
    assert_eq!(form.name.cursor(), 4);

    form.toggle_focus();
    form.focused_mut().backspace();
    assert_eq!(form.url.value(), "https://docs.r");
}

#[test]
fn test_rename_form() {
    let mut form = RenameForm::new("Old name");
    assert_eq!(form.submit(), Some("Old name".to_string()));

    form.name.clear();
    assert_eq!(form.submit(), None);
}

#[test]
fn test_text_input_cursor_movement() {
    let mut input = TextInput::new();
    type_into(&mut input, "abc");
    input.move_left();
    input.insert('X');
    assert_eq!(input.value(), "abXc");

    input.home();
    assert!(!input.backspace(), "nothing before the cursor");
    input.end();
    assert!(!input.delete(), "nothing after the cursor");
    input.move_right();
    assert_eq!(input.cursor(), 4);
}

#[test]
fn test_upload_form_without_paths() {
    let mut form = UploadForm::default();
    type_into(&mut form.paths, " ; ;");
    assert_eq!(form.submit(), None);
}
