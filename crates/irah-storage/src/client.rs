use aws_sdk_s3::Client;

/// Build an S3 client for `region`, optionally from a named credentials profile.
/// Without a profile the default credential chain is used.
pub async fn build_client(region: &str, profile: Option<&str>) -> Client {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(profile) = profile {
        builder = builder.profile_name(profile);
    }

    let config = builder.load().await;
    Client::new(&config)
}
