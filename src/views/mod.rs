pub mod article;
pub mod chat;
pub mod home;
pub mod post;
pub mod sections;
pub mod shared;

pub use article::ArticleDetail;
pub use chat::ChatPanel;
pub use home::Home;
pub use post::PostArticle;
pub use sections::{Esports, News, NotFound, Reviews};
