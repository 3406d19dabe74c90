use galileo::{CollaboratorRole, Galileo};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), galileo::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "chatbot-evals".to_string());

    let galileo = Galileo::from_env()?;
    let projects = galileo.projects();
    let project = projects.get_by_name(&name).await?;

    for collaborator in projects.list_user_collaborators(project.id).await? {
        println!("{collaborator}");
        if collaborator.role() == CollaboratorRole::Viewer {
            let promoted = collaborator
                .update(&projects, CollaboratorRole::Editor)
                .await?;
            println!("  promoted to {}", promoted.role());
        }
    }
    Ok(())
}
