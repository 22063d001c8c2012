//! Resource records of the Data API.
//!
//! Field lists are the complete sets each `get.*` method can return; they
//! double as the default `fields` parameter of list reads.

use crate::core::record::record;

record! {
    /// Account the session belongs to (`get.account`)
    pub struct Account(AccountFields) {
        app_id,
        name,
        timezone,
    }
}

record! {
    pub struct VirtualNumber(VirtualNumberFields) {
        id,
        virtual_phone_number,
        activation_date,
        status,
        category,
        r#type as "type",
        site_id,
        site_domain_name,
        campaign_id,
        campaign_name,
        scenarios,
    }
}

record! {
    /// Number that can be connected to the account
    pub struct AvailableVirtualNumber(AvailableVirtualNumberFields) {
        virtual_phone_number,
        category,
        region_name,
        activation_charge,
        monthly_charge,
    }
}

record! {
    pub struct SipLine(SipLineFields) {
        id,
        employee_id,
        employee_full_name,
        virtual_phone_number,
        phone_number,
        physical_state,
        billing_state,
        channels_count,
        ip_address,
        password,
    }
}

record! {
    pub struct Scenario(ScenarioFields) {
        id,
        name,
        virtual_phone_numbers,
        site_ids,
        campaign_ids,
    }
}

record! {
    /// Audio file available to scenarios
    pub struct MediaFile(MediaFileFields) {
        id,
        name,
        size,
        duration,
        r#type as "type",
        creation_date,
    }
}

record! {
    pub struct Campaign(CampaignFields) {
        id,
        name,
        description,
        status,
        creation_time: timestamp,
        costs,
        site_id,
        site_domain_name,
        site_blocks,
        campaign_conditions,
        dynamic_call_tracking,
        static_utm,
        static_utm_source,
    }
}

record! {
    pub struct CampaignAvailablePhoneNumber(CampaignAvailablePhoneNumberFields) {
        id,
        virtual_phone_number,
        category,
        status,
    }
}

record! {
    pub struct CampaignAvailableRedirectPhoneNumber(CampaignAvailableRedirectPhoneNumberFields) {
        id,
        phone_number,
        r#type as "type",
    }
}

record! {
    /// Attribution weights of a site's campaign parameters
    pub struct CampaignWeight(CampaignWeightFields) {
        site_id,
        entrance_page,
        referrer_domain,
        search_engine,
        search_query,
        engine,
        referrer,
        channel,
        location,
        utm_tags,
        os_tags,
        other_tags,
    }
}

record! {
    pub struct Site(SiteFields) {
        id,
        domain_name,
        default_phone_number,
        default_scenario_id,
        industry_id,
        target_call_min_duration,
        track_subdomains_enabled,
        cookie_lifetime,
        campaign_lifetime,
        sales_enabled,
        second_communication_period,
        services_enabled,
        replacement_dynamical_block_enabled,
        widget_link,
        show_visitor_id,
        site_key,
        connected_integrations,
    }
}

record! {
    pub struct SiteBlock(SiteBlockFields) {
        id,
        name,
        site_id,
    }
}

record! {
    pub struct Tag(TagFields) {
        id,
        name,
        r#type as "type",
    }
}

record! {
    pub struct Employee(EmployeeFields) {
        id,
        first_name,
        last_name,
        patronymic,
        full_name,
        status,
        email,
        phone_numbers,
        extension,
        allowed_in_call_types,
        allowed_out_call_types,
        call_recording,
        schedule_id,
        schedule_name,
        calls_available,
        operator,
        groups,
        coach,
    }
}

record! {
    pub struct EmployeeGroup(EmployeeGroupFields) {
        id,
        name,
        members,
        group_phone_number,
        queue_enabled,
        channels_count,
    }
}

record! {
    /// Login of the account's web interface
    pub struct CustomerUser(CustomerUserFields) {
        id,
        login,
        description,
        employee_id,
        employee_full_name,
        allowed_ips,
        permissions,
    }
}

record! {
    /// One row of `get.communications_report`
    pub struct Communication(CommunicationFields) {
        id,
        communication_id,
        communication_type,
        communication_number,
        communication_page_url,
        start_time: timestamp,
        site_id,
        site_domain_name,
        campaign_id,
        campaign_name,
        visitor_id,
        person_id,
        visitor_type,
        visitor_session_id,
        visits_count,
        visitor_first_campaign_id,
        visitor_first_campaign_name,
        visitor_city,
        visitor_region,
        visitor_country,
        visitor_device,
        ua_client_id,
        ym_client_id,
        sale_date: timestamp,
        sale_cost,
        search_query,
        search_engine,
        referrer_domain,
        referrer,
        entrance_page,
        gclid,
        yclid,
        ymclid,
        ef_id,
        channel,
        tags,
        utm_source,
        utm_medium,
        utm_term,
        utm_content,
        utm_campaign,
        contact_id,
        contact_full_name,
        contact_phone_number,
    }
}

record! {
    /// One call session of `get.calls_report`
    pub struct Call(CallFields) {
        id,
        start_time: timestamp,
        finish_time: timestamp,
        virtual_phone_number,
        is_transfer,
        finish_reason,
        direction,
        source,
        communication_number,
        communication_page_url,
        communication_id,
        communication_type,
        is_lost,
        cpn_region_id,
        cpn_region_name,
        wait_duration,
        total_wait_duration,
        lost_call_processing_duration,
        talk_duration,
        clean_talk_duration,
        total_duration,
        postprocess_duration,
        ua_client_id,
        ym_client_id,
        sale_date: timestamp,
        sale_cost,
        search_query,
        search_engine,
        referrer_domain,
        referrer,
        entrance_page,
        gclid,
        yclid,
        ymclid,
        ef_id,
        channel,
        site_id,
        site_domain_name,
        campaign_id,
        campaign_name,
        visit_other_campaign,
        visitor_id,
        person_id,
        visitor_type,
        visitor_session_id,
        visits_count,
        visitor_first_campaign_id,
        visitor_first_campaign_name,
        visitor_city,
        visitor_region,
        visitor_country,
        visitor_device,
        last_answered_employee_id,
        last_answered_employee_full_name,
        last_answered_employee_rating,
        first_answered_employee_id,
        first_answered_employee_full_name,
        scenario_id,
        scenario_name,
        call_api_external_id,
        call_api_request_id,
        contact_phone_number,
        contact_full_name,
        contact_id,
        utm_source,
        utm_medium,
        utm_term,
        utm_content,
        utm_campaign,
        openstat_ad,
        openstat_campaign,
        openstat_service,
        openstat_source,
        eq_utm_source,
        eq_utm_medium,
        eq_utm_term,
        eq_utm_content,
        eq_utm_campaign,
        eq_utm_referrer,
        eq_utm_expid,
        attributes,
        call_records,
        voice_mail_records,
        wav_call_records,
        full_record_file_link,
        tags,
        employees,
        scenario_operations,
        is_transfer_to_ivr,
        is_multichannel,
    }
}

record! {
    /// One leg (per participant) of a call session
    pub struct CallLeg(CallLegFields) {
        id,
        call_session_id,
        call_records,
        virtual_phone_number,
        start_time: timestamp,
        connect_time: timestamp,
        duration,
        total_duration,
        calling_phone_number,
        called_phone_number,
        direction,
        is_transfered,
        is_operator,
        is_coach,
        is_failed,
        is_talked,
        employee_id,
        employee_full_name,
        employee_phone_number,
        scenario_id,
        scenario_name,
        release_cause_code,
        release_cause_description,
        contact_phone_number,
        contact_full_name,
        contact_id,
        action_id,
        action_name,
        group_id,
        group_name,
    }
}

record! {
    /// Call leg with its billing details
    pub struct FinancialCallLeg(FinancialCallLegFields) {
        id,
        call_session_id,
        start_time: timestamp,
        duration,
        tariff_duration,
        direction,
        virtual_phone_number,
        calling_phone_number,
        called_phone_number,
        region_name,
        total_charge,
        charge_currency,
        employee_id,
        employee_full_name,
    }
}

record! {
    pub struct Goal(GoalFields) {
        id,
        goal_id,
        goal_name,
        date_time: timestamp,
        site_id,
        site_domain_name,
        campaign_id,
        campaign_name,
        visitor_id,
        person_id,
        visitor_session_id,
        communication_id,
        communication_type,
        search_query,
        search_engine,
        referrer_domain,
        referrer,
        entrance_page,
        channel,
        tags,
        utm_source,
        utm_medium,
        utm_term,
        utm_content,
        utm_campaign,
    }
}

record! {
    pub struct Chat(ChatFields) {
        id,
        date_time: timestamp,
        status,
        chat_channel_name,
        chat_channel_type,
        source,
        employee_id,
        employee_full_name,
        duration,
        wait_duration,
        visitor_id,
        person_id,
        visitor_session_id,
        visitor_name,
        visitor_phone_number,
        visitor_email,
        site_id,
        site_domain_name,
        campaign_id,
        campaign_name,
        communication_page_url,
        messages_count,
        tags,
        utm_source,
        utm_medium,
        utm_term,
        utm_content,
        utm_campaign,
    }
}

record! {
    pub struct ChatMessage(ChatMessageFields) {
        id,
        date_time: timestamp,
        text,
        source,
        employee_id,
        employee_full_name,
    }
}

record! {
    /// Message left through the site widget while nobody was online
    pub struct OfflineMessage(OfflineMessageFields) {
        id,
        date_time: timestamp,
        text,
        status,
        form_type,
        communication_page_url,
        visitor_id,
        person_id,
        visitor_session_id,
        visitor_name,
        visitor_phone_number,
        visitor_email,
        site_id,
        site_domain_name,
        campaign_id,
        campaign_name,
        process_time: timestamp,
        process_employee_id,
        process_employee_full_name,
        tags,
        utm_source,
        utm_medium,
        utm_term,
        utm_content,
        utm_campaign,
    }
}

record! {
    pub struct VisitorSession(VisitorSessionFields) {
        id,
        date_time: timestamp,
        visitor_id,
        person_id,
        visitor_type,
        visitor_ip,
        visitor_city,
        visitor_region,
        visitor_country,
        visitor_device,
        visits_count,
        site_id,
        site_domain_name,
        campaign_id,
        campaign_name,
        entrance_page,
        referrer,
        referrer_domain,
        search_engine,
        search_query,
        channel,
        ua_client_id,
        ym_client_id,
        gclid,
        yclid,
        ymclid,
        utm_source,
        utm_medium,
        utm_term,
        utm_content,
        utm_campaign,
    }
}

record! {
    pub struct Contact(ContactFields) {
        id,
        first_name,
        last_name,
        patronymic,
        full_name,
        emails,
        phone_numbers,
        groups,
        organization_id,
        organization_name,
        personal_manager_id,
        personal_manager_full_name,
        communications_count,
        creation_date,
    }
}

record! {
    pub struct ContactGroup(ContactGroupFields) {
        id,
        name,
        members,
        contacts_count,
    }
}

record! {
    pub struct ContactOrganization(ContactOrganizationFields) {
        id,
        name,
    }
}

record! {
    /// Working-hours schedule used by scenarios and employees
    pub struct Schedule(ScheduleFields) {
        id,
        name,
        schedules,
    }
}

record! {
    /// Per-day totals of one campaign
    pub struct CampaignDailyStat(CampaignDailyStatFields) {
        date,
        campaign_id,
        campaign_name,
        site_id,
        site_domain_name,
        visits_count,
        communications_count,
        calls_count,
        chats_count,
        goals_count,
        offline_messages_count,
        costs,
    }
}

record! {
    /// Client account managed by an agency account
    pub struct Customer(CustomerFields) {
        id,
        name,
        login,
        email,
        phone_number,
        description,
        state,
        creation_date,
        balance,
        currency,
    }
}
