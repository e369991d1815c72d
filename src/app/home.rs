use crate::prelude::*;
use crate::views::app::App;
use crate::views::create_event::{CreateEvent, EventDraft};
use crate::views::dates;
use crate::views::register_modal::RegistrationDraft;

/// Add all `home` routes to the router.
#[rustfmt::skip]
pub fn add_routes(router: AppRouter) -> AppRouter {
    router.public_routes(|r| {
        r.route("/", get(home_page))
         .route("/events", post(create_event_form))
         .route("/registrations", post(register_form))
    })
}

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct PageHtml {
    app: App,
    year: String,
}

impl PageHtml {
    fn new(app: App) -> Self {
        Self { app, year: dates::current_year() }
    }
}

#[derive(serde::Deserialize)]
struct PageQuery {
    event: Option<String>,
}

/// Display the front page, with the registration modal open if an event is selected.
async fn home_page(
    State(state): State<SharedAppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<impl IntoResponse> {
    let mut app = App::new();
    app.mount(&state.api).await;
    if let Some(id) = query.event {
        if !app.select(&id) {
            tracing::debug!("selected event id={id} is not listed");
        }
    }
    Ok(PageHtml::new(app))
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "snake_case")]
enum CreateAction {
    AddTag,
    #[default]
    Create,
}

#[derive(serde::Deserialize)]
struct CreateEventForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    capacity: String,
    /// Current tag input.
    #[serde(default)]
    tag: String,
    /// Tags added so far, as a JSON array.
    #[serde(default)]
    tags: String,
    #[serde(default)]
    action: CreateAction,
}

/// Process the create event form, either adding a tag or submitting the event.
///
/// A created event redirects back to the list. Anything else re-renders the page with the draft kept.
async fn create_event_form(
    State(state): State<SharedAppState>,
    Form(form): Form<CreateEventForm>,
) -> AppResult<Response> {
    let draft = EventDraft {
        title: form.title,
        description: form.description,
        date: form.date,
        location: form.location,
        capacity: form.capacity,
    };
    let mut app = App::new();
    app.create = CreateEvent::from_submission(draft, form.tag, &form.tags)?;

    match form.action {
        CreateAction::AddTag => app.create.add_tag(),
        CreateAction::Create => {
            if app.create_event(&state.api, state.config.app.tz).await {
                tracing::debug!("event created, refreshes={}", app.refreshes());
                return Ok(Redirect::to("/#events").into_response());
            }
        }
    }
    app.mount(&state.api).await;
    Ok(PageHtml::new(app).into_response())
}

#[derive(serde::Deserialize)]
struct RegisterForm {
    #[serde(default)]
    event_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    department: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    roll_no: String,
    #[serde(default)]
    phone: String,
}

/// Process the registration form for the selected event.
///
/// An accepted registration redirects back to the list, a rejected one re-renders the open modal.
async fn register_form(
    State(state): State<SharedAppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    let mut app = App::new();
    app.mount(&state.api).await;
    if !app.select(&form.event_id) {
        return Err(AppError::NotFound);
    }
    app.modal.draft = RegistrationDraft {
        name: form.name,
        email: form.email,
        department: form.department,
        year: form.year,
        roll_no: form.roll_no,
        phone: form.phone,
    };
    if app.register(&state.api).await {
        return Ok(Redirect::to("/#events").into_response());
    }
    Ok(PageHtml::new(app).into_response())
}
