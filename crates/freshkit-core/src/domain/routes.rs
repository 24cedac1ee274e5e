//! Labelled route bodies for the `route new` command.
//!
//! Routes live in the framework's `routes/` folder and come in a handful
//! of canonical shapes; each body is a complete file with the usual
//! identifier placeholder.

use crate::domain::error::DomainError;

/// One selectable route shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate {
    pub label: &'static str,
    pub body: &'static str,
}

/// Where route files are written by default.
pub const ROUTES_FOLDER: &str = "routes";

pub const ROUTE_TEMPLATES: &[RouteTemplate] = &[
    RouteTemplate {
        label: "Simple JSX Page",
        body: r#"// Document https://fresh.deno.dev/docs/getting-started/create-a-route

export default function __FILENAME__() {
  return (
    <main>
      <h1>__FILENAME__</h1>
      <p>This is the about page.</p>
    </main>
  );
}"#,
    },
    RouteTemplate {
        label: "Dynamic route",
        body: r#"// Document https://fresh.deno.dev/docs/getting-started/dynamic-routes

import { PageProps } from "$fresh/server.ts";

export default function __FILENAME__(props: PageProps) {
  const { name } = props.params;
  return (
    <main>
      <p>Greetings to you, {name}!</p>
    </main>
  );
}"#,
    },
    RouteTemplate {
        label: "Handler route",
        body: r#"// Document https://fresh.deno.dev/docs/concepts/routes#handler-route

import { FreshContext, Handlers } from "$fresh/server.ts";

export const handler: Handlers = {
  GET(_req: Request, _ctx: FreshContext) {
    return new Response("Hello World");
  },
};"#,
    },
    RouteTemplate {
        label: "Async component route with defineHelper (Recommended)",
        body: r#"// Document https://fresh.deno.dev/docs/concepts/routes#define-helper

import { defineRoute } from "$fresh/server.ts";

export default defineRoute(async (req, ctx) => {
  // const data = await loadData();
  const data = { name: "World" };

  return (
    <div class="page">
      <h1>Hello {data.name}</h1>
    </div>
  );
});"#,
    },
    RouteTemplate {
        label: "Mixed handler and component route",
        body: r#"// Document https://fresh.deno.dev/docs/concepts/routes#mixed-handler-and-component-route

import { Handlers, PageProps } from "$fresh/server.ts";

interface Data {
  foo: number;
}

export const handler: Handlers<Data> = {
  async GET(_req, ctx) {
    // const value = await loadFooValue();
    return ctx.render({ foo: 1 });
  },
};

export default function __FILENAME__(props: PageProps<Data>) {
  return <p>foo is: {props.data.foo}</p>;
}"#,
    },
    RouteTemplate {
        label: "Async route component",
        body: r#"// Document https://fresh.deno.dev/docs/concepts/routes#async-route-components

import { RouteContext } from "$fresh/server.ts";

export default async function __FILENAME__(req: Request, ctx: RouteContext) {
  // const value = await loadFooValue();
  return <p>foo is: {1}</p>;
}"#,
    },
];

/// All templates whose label contains `query` (case-insensitive).
pub fn matching_routes(query: &str) -> Vec<&'static RouteTemplate> {
    let needle = query.to_ascii_lowercase();
    ROUTE_TEMPLATES
        .iter()
        .filter(|t| t.label.to_ascii_lowercase().contains(&needle))
        .collect()
}

/// Resolve a query to exactly one template, or explain why it cannot.
pub fn select_route(query: &str) -> Result<&'static RouteTemplate, DomainError> {
    let matches = matching_routes(query);
    match matches.as_slice() {
        [] => Err(DomainError::UnknownRouteTemplate {
            query: query.to_string(),
        }),
        [one] => Ok(one),
        many => Err(DomainError::AmbiguousRouteTemplate {
            query: query.to_string(),
            matches: many
                .iter()
                .map(|t| t.label)
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
