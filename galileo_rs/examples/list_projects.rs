use galileo::{Galileo, ProjectType};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), galileo::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let galileo = Galileo::from_env()?;
    let projects = galileo.projects().list(Some(ProjectType::GenAi)).await?;
    println!("projects={}", projects.len());
    for project in projects {
        println!(
            "{} {} {}",
            project.id,
            project.name.as_deref().unwrap_or("-"),
            project.created_at
        );
    }
    Ok(())
}
