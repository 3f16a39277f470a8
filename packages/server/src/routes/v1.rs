use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/events", event_routes())
        .nest("/candidates", candidate_routes())
        .nest("/judges", judge_routes())
        .nest("/criteria", criteria_routes())
        .nest("/awards", award_routes())
        .nest("/scores", score_routes())
        .nest("/dashboard", dashboard_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::judge_login))
        .routes(routes!(handlers::auth::signup))
        .routes(routes!(handlers::auth::me))
}

fn event_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::event::list_events,
            handlers::event::create_event
        ))
        .routes(routes!(
            handlers::event::get_event,
            handlers::event::update_event,
            handlers::event::delete_event
        ))
        .routes(routes!(
            handlers::candidate::list_candidates,
            handlers::candidate::create_candidate
        ))
        .routes(routes!(
            handlers::judge::list_judges,
            handlers::judge::create_judge
        ))
        .routes(routes!(
            handlers::criteria::list_criteria,
            handlers::criteria::create_criteria
        ))
        .routes(routes!(
            handlers::award::list_awards,
            handlers::award::create_award
        ))
        .routes(routes!(handlers::vote::cast_vote))
}

fn candidate_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::candidate::get_candidate,
            handlers::candidate::update_candidate,
            handlers::candidate::delete_candidate
        ))
        .routes(routes!(handlers::vote::list_candidate_scores))
}

fn judge_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::judge::update_judge,
        handlers::judge::delete_judge
    ))
}

fn criteria_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::criteria::update_criteria,
        handlers::criteria::delete_criteria
    ))
}

fn award_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::award::update_award,
            handlers::award::delete_award
        ))
        .routes(routes!(handlers::award::get_award_tally))
}

fn score_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::score::submit_score))
        .routes(routes!(
            handlers::score::update_score,
            handlers::score::delete_score
        ))
}

fn dashboard_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::dashboard::coordinator_dashboard))
        .routes(routes!(handlers::dashboard::judge_dashboard))
}
