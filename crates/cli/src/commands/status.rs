use crate::di::UseCases;

pub async fn run(use_cases: &UseCases) -> anyhow::Result<()> {
    let status = use_cases.get_setup_status.execute().await?;

    if status.configured {
        println!(
            "Configured for profile {}",
            status.profile_id.as_deref().unwrap_or_default()
        );
    } else {
        println!("Setup required: run `nextdns-allow configure --api-key <KEY> --profile-id <ID>`");
    }
    Ok(())
}
