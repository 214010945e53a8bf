use super::operations;
use crate::model::*;

operations! {
    // Users

    /// Creates a user.
    fn user_create(UserCreateInput) -> User = POST "/api/1.0.0/users";
    /// Gets a user.
    fn user_get(UserGetInput) -> User = GET "/api/1.0.0/users/{user_id}", user_id;
    /// Updates a user.
    fn user_update(UserUpdateInput) -> User = PUT "/api/1.0.0/users/{user_id}", user_id;
    /// Deletes a user.
    fn user_delete(UserDeleteInput) = DELETE "/api/1.0.0/users/{user_id}", user_id;
    /// Lists users.
    fn user_list(UserListInput) -> Vec<User> = GET "/api/1.0.0/users";

    // Access tokens

    /// Gets an access token.
    fn access_token_get(AccessTokenGetInput) -> AccessToken
        = GET "/api/1.0.0/tokens/{access_token_id}", access_token_id;
    /// Revokes an access token, it stays listed but no longer grants access.
    fn access_token_revoke(AccessTokenRevokeInput)
        = POST "/api/1.0.0/tokens/{access_token_id}/revoke", access_token_id;
    /// Deletes an access token.
    fn access_token_delete(AccessTokenDeleteInput)
        = DELETE "/api/1.0.0/tokens/{access_token_id}", access_token_id;

    // Applications

    /// Creates an application.
    fn application_create(ApplicationCreateInput) -> Application = POST "/api/1.0.0/applications";
    /// Gets an application.
    fn application_get(ApplicationGetInput) -> Application
        = GET "/api/1.0.0/applications/{application_id}", application_id;
    /// Updates an application.
    fn application_update(ApplicationUpdateInput) -> Application
        = PUT "/api/1.0.0/applications/{application_id}", application_id;
    /// Deletes an application.
    fn application_delete(ApplicationDeleteInput)
        = DELETE "/api/1.0.0/applications/{application_id}", application_id;
    /// Lists applications.
    fn application_list(ApplicationListInput) -> Vec<Application> = GET "/api/1.0.0/applications";

    // Articles

    /// Creates an article.
    fn article_create(ArticleCreateInput) -> Article = POST "/api/1.0.0/articles";
    /// Gets an article.
    fn article_get(ArticleGetInput) -> Article = GET "/api/1.0.0/articles/{article_id}", article_id;
    /// Updates an article.
    fn article_update(ArticleUpdateInput) -> Article
        = PUT "/api/1.0.0/articles/{article_id}", article_id;
    /// Deletes an article.
    fn article_delete(ArticleDeleteInput) = DELETE "/api/1.0.0/articles/{article_id}", article_id;
    /// Lists articles.
    fn article_list(ArticleListInput) -> Vec<Article> = GET "/api/1.0.0/articles";

    // Assets

    /// Gets an asset.
    fn asset_get(AssetGetInput) -> Asset = GET "/api/1.0.0/assets/{asset_id}", asset_id;
    /// Updates the description of an asset, the file itself is immutable.
    fn asset_update(AssetUpdateInput) -> Asset = PUT "/api/1.0.0/assets/{asset_id}", asset_id;
    /// Deletes an asset.
    fn asset_delete(AssetDeleteInput) = DELETE "/api/1.0.0/assets/{asset_id}", asset_id;
    /// Lists assets.
    fn asset_list(AssetListInput) -> Vec<Asset> = GET "/api/1.0.0/assets";

    // Audiences

    /// Creates an audience.
    fn audience_create(AudienceCreateInput) -> Audience = POST "/api/1.0.0/audiences";
    /// Gets an audience.
    fn audience_get(AudienceGetInput) -> Audience
        = GET "/api/1.0.0/audiences/{audience_id}", audience_id;
    /// Updates an audience.
    fn audience_update(AudienceUpdateInput) -> Audience
        = PUT "/api/1.0.0/audiences/{audience_id}", audience_id;
    /// Deletes an audience.
    fn audience_delete(AudienceDeleteInput)
        = DELETE "/api/1.0.0/audiences/{audience_id}", audience_id;
    /// Lists audiences.
    fn audience_list(AudienceListInput) -> Vec<Audience> = GET "/api/1.0.0/audiences";

    // Distributions

    /// Creates a distribution.
    fn distribution_create(DistributionCreateInput) -> Distribution
        = POST "/api/1.0.0/distributions";
    /// Gets a distribution.
    fn distribution_get(DistributionGetInput) -> Distribution
        = GET "/api/1.0.0/distributions/{distribution_id}", distribution_id;
    /// Updates a distribution.
    fn distribution_update(DistributionUpdateInput) -> Distribution
        = PUT "/api/1.0.0/distributions/{distribution_id}", distribution_id;
    /// Deletes a distribution.
    fn distribution_delete(DistributionDeleteInput)
        = DELETE "/api/1.0.0/distributions/{distribution_id}", distribution_id;
    /// Lists distributions.
    fn distribution_list(DistributionListInput) -> Vec<Distribution>
        = GET "/api/1.0.0/distributions";

    // Instances

    /// Creates an instance.
    fn instance_create(InstanceCreateInput) -> Instance = POST "/api/1.0.0/instances";
    /// Gets an instance.
    fn instance_get(InstanceGetInput) -> Instance
        = GET "/api/1.0.0/instances/{instance_id}", instance_id;
    /// Updates an instance.
    fn instance_update(InstanceUpdateInput) -> Instance
        = PUT "/api/1.0.0/instances/{instance_id}", instance_id;
    /// Deletes an instance.
    fn instance_delete(InstanceDeleteInput)
        = DELETE "/api/1.0.0/instances/{instance_id}", instance_id;
    /// Lists instances.
    fn instance_list(InstanceListInput) -> Vec<Instance> = GET "/api/1.0.0/instances";

    // Jobs

    /// Creates a job.
    fn job_create(JobCreateInput) -> Job = POST "/api/1.0.0/jobs";
    /// Gets a job.
    fn job_get(JobGetInput) -> Job = GET "/api/1.0.0/jobs/{job_id}", job_id;
    /// Updates a job.
    fn job_update(JobUpdateInput) -> Job = PUT "/api/1.0.0/jobs/{job_id}", job_id;
    /// Lists jobs.
    fn job_list(JobListInput) -> Vec<Job> = GET "/api/1.0.0/jobs";
    /// Restarts a finished or failed job.
    fn job_restart(JobRestartInput) -> Job = POST "/api/1.0.0/jobs/{job_id}", job_id;
    /// Cancels a pending or running job.
    fn job_cancel(JobCancelInput) = DELETE "/api/1.0.0/jobs/{job_id}", job_id;

    // Options

    /// Gets an option of the current instance.
    fn option_get(OptionNameInput) -> InstanceOption = GET "/api/1.0.0/options/{name}", name;
    /// Lists the options of the current instance.
    fn option_list(OptionListInput) -> Vec<InstanceOption> = GET "/api/1.0.0/options";
    /// Sets an option of the current instance.
    fn option_update(OptionUpdateInput) -> InstanceOption = PUT "/api/1.0.0/options/{name}", name;
    /// Removes an option of the current instance.
    fn option_remove(OptionNameInput) = DELETE "/api/1.0.0/options/{name}", name;

    // Partners

    /// Creates a partner.
    fn partner_create(PartnerCreateInput) -> Partner = POST "/api/1.0.0/partners";
    /// Gets a partner.
    fn partner_get(PartnerGetInput) -> Partner = GET "/api/1.0.0/partners/{partner_id}", partner_id;
    /// Updates a partner.
    fn partner_update(PartnerUpdateInput) -> Partner
        = PUT "/api/1.0.0/partners/{partner_id}", partner_id;
    /// Deletes a partner.
    fn partner_delete(PartnerDeleteInput) = DELETE "/api/1.0.0/partners/{partner_id}", partner_id;
    /// Lists partners.
    fn partner_list(PartnerListInput) -> Vec<Partner> = GET "/api/1.0.0/partners";
    /// Issues client credentials to a partner.
    fn partner_credential_create(PartnerCredentialCreateInput) -> PartnerCredential
        = POST "/api/1.0.0/partners/{partner_id}/credentials", partner_id;
    /// Gets partner credentials, without their secret.
    fn partner_credential_get(PartnerCredentialInput) -> PartnerCredential
        = GET "/api/1.0.0/partners/{partner_id}/credentials/{client_id}", partner_id, client_id;
    /// Deletes partner credentials.
    fn partner_credential_delete(PartnerCredentialInput)
        = DELETE "/api/1.0.0/partners/{partner_id}/credentials/{client_id}", partner_id, client_id;
    /// Issues an access token to a partner.
    fn partner_token_create(PartnerTokenCreateInput) -> PartnerAccessToken
        = POST "/api/1.0.0/partners/{partner_id}/tokens", partner_id;
    /// Gets a partner access token.
    fn partner_token_get(PartnerTokenInput) -> PartnerAccessToken
        = GET "/api/1.0.0/partners/{partner_id}/tokens/{token_id}", partner_id, token_id;
    /// Revokes a partner access token.
    fn partner_token_revoke(PartnerTokenInput)
        = DELETE "/api/1.0.0/partners/{partner_id}/tokens/{token_id}", partner_id, token_id;

    // Plans

    /// Creates a plan.
    fn plan_create(PlanCreateInput) -> Plan = POST "/api/1.0.0/plans";
    /// Gets a plan.
    fn plan_get(PlanGetInput) -> Plan = GET "/api/1.0.0/plans/{plan_id}", plan_id;
    /// Updates a plan.
    fn plan_update(PlanUpdateInput) -> Plan = PUT "/api/1.0.0/plans/{plan_id}", plan_id;
    /// Deletes a plan.
    fn plan_delete(PlanDeleteInput) = DELETE "/api/1.0.0/plans/{plan_id}", plan_id;
    /// Lists plans.
    fn plan_list(PlanListInput) -> Vec<Plan> = GET "/api/1.0.0/plans";
    /// Subscribes a user to a plan.
    fn plan_subscribe(PlanSubscribeInput) -> Subscription
        = POST "/api/1.0.0/plans/{plan_id}/subscribe", plan_id;

    // Prices

    /// Creates a price.
    fn price_create(PriceCreateInput) -> Price = POST "/api/1.0.0/prices";
    /// Gets a price.
    fn price_get(PriceGetInput) -> Price = GET "/api/1.0.0/prices/{price_id}", price_id;
    /// Updates a price.
    fn price_update(PriceUpdateInput) -> Price = PUT "/api/1.0.0/prices/{price_id}", price_id;
    /// Deletes a price.
    fn price_delete(PriceDeleteInput) = DELETE "/api/1.0.0/prices/{price_id}", price_id;
    /// Lists prices.
    fn price_list(PriceListInput) -> Vec<Price> = GET "/api/1.0.0/prices";

    // Publishers

    /// Creates a publisher.
    fn publisher_create(PublisherCreateInput) -> Publisher = POST "/api/1.0.0/publishers";
    /// Gets a publisher.
    fn publisher_get(PublisherGetInput) -> Publisher
        = GET "/api/1.0.0/publishers/{publisher_id}", publisher_id;
    /// Updates a publisher.
    fn publisher_update(PublisherUpdateInput) -> Publisher
        = PUT "/api/1.0.0/publishers/{publisher_id}", publisher_id;
    /// Deletes a publisher.
    fn publisher_delete(PublisherDeleteInput)
        = DELETE "/api/1.0.0/publishers/{publisher_id}", publisher_id;
    /// Lists publishers, with the total count.
    fn publisher_list(PublisherListInput) -> PublisherList = GET "/api/1.0.0/publishers";

    // Subscriptions

    /// Creates a subscription.
    fn subscription_create(SubscriptionCreateInput) -> Subscription
        = POST "/api/1.0.0/subscriptions";
    /// Gets a subscription.
    fn subscription_get(SubscriptionGetInput) -> Subscription
        = GET "/api/1.0.0/subscriptions/{subscription_id}", subscription_id;
    /// Updates a subscription.
    fn subscription_update(SubscriptionUpdateInput) -> Subscription
        = PUT "/api/1.0.0/subscriptions/{subscription_id}", subscription_id;
    /// Deletes a subscription.
    fn subscription_delete(SubscriptionDeleteInput)
        = DELETE "/api/1.0.0/subscriptions/{subscription_id}", subscription_id;
    /// Lists subscriptions.
    fn subscription_list(SubscriptionListInput) -> Vec<Subscription>
        = GET "/api/1.0.0/subscriptions";

    // Templates

    /// Creates a template.
    fn template_create(TemplateCreateInput) -> Template = POST "/api/1.0.0/templates";
    /// Gets a template.
    fn template_get(TemplateGetInput) -> Template
        = GET "/api/1.0.0/templates/{template_id}", template_id;
    /// Updates a template.
    fn template_update(TemplateUpdateInput) -> Template
        = PUT "/api/1.0.0/templates/{template_id}", template_id;
    /// Deletes a template.
    fn template_delete(TemplateDeleteInput)
        = DELETE "/api/1.0.0/templates/{template_id}", template_id;
    /// Lists templates.
    fn template_list(TemplateListInput) -> Vec<Template> = GET "/api/1.0.0/templates";

    // Messaging

    /// Sends an e-mail, one message is returned per recipient.
    fn send_mail(SendMailInput) -> Vec<MailMessage> = POST "/api/1.0.0/mail";
    /// Sends an SMS, one message is returned per recipient.
    fn send_sms(SendSmsInput) -> Vec<SmsMessage> = POST "/api/1.0.0/sms";
}
