// Chat proxy: validates the visitor message and forwards it, with the
// biography prompt, to the completion API through llm_client.

pub mod handlers;
