use crate::di::UseCases;

pub async fn run(use_cases: &UseCases, api_key: &str, profile_id: &str) -> anyhow::Result<()> {
    let credentials = use_cases.save_credentials.execute(api_key, profile_id).await?;
    println!(
        "Settings saved successfully! Profile: {}",
        credentials.profile_id
    );
    Ok(())
}
