//! Inline code snippets offered as completions in JSX modules.

/// A labelled snippet body, inserted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    pub label: &'static str,
    pub body: &'static str,
}

pub const SNIPPETS: &[Snippet] = &[
    Snippet {
        label: "Deco - Loader",
        body: "export const loader = (props: Page, req: Request, ctx: AppContext) => {\n\treturn {\n\t\t...props\n\t}\n};",
    },
    Snippet {
        label: "Deco - Action",
        body: "export const action = (props: Page, req: Request, ctx: AppContext) => {\n\treturn {\n\t\t...props\n\t}\n};",
    },
    Snippet {
        label: "Deco - Loading Fallback",
        body: "export const LoadingFallback = (props: Props) => {\n\treturn (\n   <div style={{ height: \"716px\" }} class=\"flex justify-center items-center\">\n     <span class=\"loading loading-spinner\" />\n   </div>\n\t);\n};",
    },
    Snippet {
        label: "Deco - Error Fallback",
        body: "export function ErrorFallback({ error }: { error?: Error }) {\n  // Your error handling logic goes here\n  // You can display an error message, log the error, or render a fallback UI\n  return (\n    <div>\n      <h2>Oops! Something went wrong.</h2>\n      <p>{error.message}</p>\n    </div>\n  );\n};",
    },
];
