// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CampusDesk command-line client
//!
//! Small demonstration client exercising the session core end to end:
//! login persists a session, whoami reads the rehydrated state, students
//! goes through the admin route guard before calling the API.

use campus_desk::api::{ApiClient, Authenticator};
use campus_desk::config::Config;
use campus_desk::guard::{GuardVerdict, RouteGuard};
use campus_desk::models::Role;
use campus_desk::session::SessionStore;
use campus_desk::storage::FileStorage;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().expect("Failed to load configuration");
    tracing::debug!(api = %config.api_base_url, "Configuration loaded");

    let storage = FileStorage::new(config.storage_path.clone());
    let store = Arc::new(SessionStore::new(Box::new(storage)));
    store.initialize();

    let api = ApiClient::new(&config)?;
    let auth = Authenticator::new(api.clone(), store.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("login") => match (args.get(1), args.get(2)) {
            (Some(email), Some(password)) => {
                let user = auth.login(email, password).await?;
                println!("Logged in as {} ({})", user.full_name, user.role);
            }
            _ => usage(),
        },
        Some("whoami") => {
            let state = store.snapshot();
            match state.user {
                Some(user) if state.is_authenticated => {
                    println!("{} <{}> ({})", user.full_name, user.email, user.role);
                    if let Some(data) = user.student_data {
                        println!(
                            "  {} since {}, {}",
                            data.course, data.enrollment_year, data.status
                        );
                    }
                }
                _ => println!("Not logged in"),
            }
        }
        Some("students") => {
            // Gated exactly like the admin students screen
            let guard = RouteGuard::allow_roles([Role::Admin]);
            match guard.evaluate(&store.snapshot()) {
                GuardVerdict::Allow => {
                    let token = store
                        .snapshot()
                        .token
                        .expect("authorized session has a token");
                    let response = api.list_students(&token).await?;
                    for student in &response.students {
                        let name = student
                            .user
                            .as_ref()
                            .map(|u| u.full_name.as_str())
                            .unwrap_or("(deleted user)");
                        println!(
                            "{:<30} {:<20} {:<6} {}",
                            name, student.course, student.enrollment_year, student.status
                        );
                    }
                    println!("{} total", response.total);
                }
                verdict => {
                    let destination = verdict
                        .redirect_destination()
                        .unwrap_or(RouteGuard::LOGIN_DESTINATION);
                    println!("Access denied, a browser would redirect to {destination}");
                }
            }
        }
        Some("logout") => {
            auth.logout();
            println!("Logged out");
        }
        _ => usage(),
    }

    Ok(())
}

fn usage() {
    eprintln!("Usage: campus-desk <login EMAIL PASSWORD | whoami | students | logout>");
}

/// Initialize logging; RUST_LOG overrides the defaults.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("campus_desk=debug".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
