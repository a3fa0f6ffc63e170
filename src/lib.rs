//! # Multiple Responses
//!
//! > **Declarative per-route responses for generated API Gateway methods.**
//!
//! An upstream generator compiles every HTTP endpoint into an
//! `AWS::ApiGateway::Method` resource carrying two parallel lists:
//! integration responses (backend side) and method responses (client side).
//! This crate rewrites those lists, right before deployment, from a map of
//! `{ statusCode -> "remove" | { headers, templates, properties } }` declared
//! on the route.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Typed input, untyped template
//! The declarative side is strongly typed ([`model::ResponseSpec`] is either
//! `Remove` or `Configure`, never a magic flag). The template stays a
//! `serde_json` tree so everything the reconciler does not touch round-trips
//! unchanged, key order included.
//!
//! ### Best effort across endpoints
//! A missing resource or an invalid status-code key is reported as a
//! [`framework::Diagnostic`] and the pass moves on. Nothing is rolled back.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Algorithms ([`identifier`], [`reconciler`], [`selector`])
//! - **[`identifier`]**: `("users/{id}", "GET")` -> `ApiGatewayMethodUsersIdVarGet`.
//! - **[`reconciler`]**: merges/removes entries in both response lists by status code.
//! - **[`selector`]**: walks functions and yields their HTTP events.
//!
//! ### 2. The Engine ([`framework`], [`lifecycle`])
//! - **Role**: Plugins declare the [`LifecycleEvent`](framework::LifecycleEvent)s
//!   they hook; [`Lifecycle`](lifecycle::Lifecycle) dispatches them.
//!
//! ### 3. The Implementation ([`plugin`])
//! - [`ResponsesPlugin`](plugin::ResponsesPlugin) wires selector, deriver and
//!   reconciler together behind `initialize(config)` / `run()`.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info multiple-responses --service service.json --template template.json
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod framework;
pub mod identifier;
pub mod lifecycle;
pub mod model;
pub mod plugin;
pub mod reconciler;
pub mod selector;
