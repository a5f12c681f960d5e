//! Gallery page: renders one card per character into `#charactersGrid` and
//! wires the edit / delete buttons when mutations are enabled.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::GalleryOptions;
use crate::constants::MSG_GALLERY_LOAD_ERROR;
use crate::dom_utils;
use crate::handlers::gallery::{
    delete_character, edit_character, load_gallery, DeleteOutcome, EditOutcome, GalleryLoad,
};
use crate::handlers::login::logout;
use crate::network::ApiClient;
use crate::platform::PageContext;
use crate::view_model::{CharacterCard, FieldFallback};

const GRID_ID: &str = "charactersGrid";
const LOGOUT_ID: &str = "logoutButton";

pub fn mount(
    document: &Document,
    ctx: PageContext,
    api: ApiClient,
    options: GalleryOptions,
) -> Result<bool, JsValue> {
    let Some(grid) = document.get_element_by_id(GRID_ID) else {
        return Ok(false);
    };

    if let Some(button) = document.get_element_by_id(LOGOUT_ID) {
        let ctx = ctx.clone();
        dom_utils::on_click(&button, move || logout(&ctx))?;
    }

    let doc = document.clone();
    spawn_local(async move {
        match load_gallery(&ctx, &api, &options).await {
            GalleryLoad::Ready(cards) => {
                let actions = options.allow_mutations.then(|| (ctx.clone(), api.clone()));
                let fallback = FieldFallback::from_show_fallback_text(options.show_fallback_text);
                for card in cards {
                    if let Err(e) = render_card(&doc, &grid, card, fallback, actions.clone()) {
                        tracing::error!(error = ?e, "failed to render character card");
                    }
                }
            }
            GalleryLoad::Failed(_) => grid.set_text_content(Some(MSG_GALLERY_LOAD_ERROR)),
            GalleryLoad::NotSignedIn | GalleryLoad::SessionExpired => {}
        }
    });

    Ok(true)
}

/// Handles to the parts of a card that change after an edit.
#[derive(Clone)]
pub struct CardElements {
    pub root: Element,
    name: Element,
    age: Element,
    role: Element,
    house: Element,
}

impl CardElements {
    fn fill(&self, document: &Document, card: &CharacterCard, fallback: FieldFallback) -> Result<(), JsValue> {
        dom_utils::set_labelled_text(document, &self.name, "Name", &card.name)?;
        dom_utils::set_labelled_text(document, &self.age, "Age", &card.age_text(fallback))?;
        dom_utils::set_labelled_text(document, &self.role, "Role", &card.role_text(fallback))?;
        dom_utils::set_labelled_text(document, &self.house, "House", &card.house_text(fallback))?;
        Ok(())
    }
}

/// Build the card markup for one character, without attaching it.
pub fn build_card(
    document: &Document,
    card: &CharacterCard,
    fallback: FieldFallback,
) -> Result<CardElements, JsValue> {
    let root = document.create_element("div")?;
    root.class_list().add_1("character-card")?;

    let img = document.create_element("img")?;
    img.set_attribute("src", card.image_src())?;
    img.set_attribute("alt", &card.image_alt())?;
    img.class_list().add_1("character-image")?;
    root.append_child(&img)?;

    let elements = CardElements {
        name: dom_utils::labelled_paragraph(document, "Name", &card.name)?,
        age: dom_utils::labelled_paragraph(document, "Age", &card.age_text(fallback))?,
        role: dom_utils::labelled_paragraph(document, "Role", &card.role_text(fallback))?,
        house: dom_utils::labelled_paragraph(document, "House", &card.house_text(fallback))?,
        root,
    };
    for field in [&elements.name, &elements.age, &elements.role, &elements.house] {
        elements.root.append_child(field)?;
    }

    Ok(elements)
}

fn render_card(
    document: &Document,
    grid: &Element,
    card: CharacterCard,
    fallback: FieldFallback,
    actions: Option<(PageContext, ApiClient)>,
) -> Result<(), JsValue> {
    let elements = build_card(document, &card, fallback)?;
    if let Some((ctx, api)) = actions {
        attach_actions(document, &elements, card, fallback, ctx, api)?;
    }
    grid.append_child(&elements.root)?;
    Ok(())
}

fn attach_actions(
    document: &Document,
    elements: &CardElements,
    card: CharacterCard,
    fallback: FieldFallback,
    ctx: PageContext,
    api: ApiClient,
) -> Result<(), JsValue> {
    let state = Rc::new(RefCell::new(card));

    let group = document.create_element("div")?;
    group.class_list().add_1("button-group")?;

    let edit_button = icon_button(document, "btn-primary", "fa-pencil")?;
    {
        let (ctx, api, state, elements, doc) = (
            ctx.clone(),
            api.clone(),
            Rc::clone(&state),
            elements.clone(),
            document.clone(),
        );
        dom_utils::on_click(&edit_button, move || {
            let current = state.borrow().clone();
            let (ctx, api, state, elements, doc) = (
                ctx.clone(),
                api.clone(),
                Rc::clone(&state),
                elements.clone(),
                doc.clone(),
            );
            spawn_local(async move {
                if let EditOutcome::Updated(updated) = edit_character(&ctx, &api, &current).await {
                    if let Err(e) = elements.fill(&doc, &updated, fallback) {
                        tracing::error!(error = ?e, "failed to refresh character card");
                    }
                    *state.borrow_mut() = updated;
                }
            });
        })?;
    }

    let delete_button = icon_button(document, "btn-danger", "fa-trash")?;
    {
        let root = elements.root.clone();
        dom_utils::on_click(&delete_button, move || {
            let current = state.borrow().clone();
            let (ctx, api, root) = (ctx.clone(), api.clone(), root.clone());
            spawn_local(async move {
                if let DeleteOutcome::Deleted = delete_character(&ctx, &api, &current).await {
                    root.remove();
                }
            });
        })?;
    }

    group.append_child(&edit_button)?;
    group.append_child(&delete_button)?;
    elements.root.append_child(&group)?;
    Ok(())
}

fn icon_button(document: &Document, variant: &str, icon: &str) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_attribute("type", "button")?;
    button.set_class_name(&format!("btn {}", variant));
    button.set_inner_html(&format!(r#"<i class="fa {}" aria-hidden="true"></i>"#, icon));
    Ok(button)
}
