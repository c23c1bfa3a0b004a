use super::types::Entry;

/// Customer-support FAQ set used when no knowledge base file exists yet.
pub fn default_entries() -> Vec<Entry> {
    vec![
        Entry::new(
            "What are your business hours?",
            "Our business hours are Monday to Friday, 9 AM to 6 PM EST. We're closed on weekends and major holidays.",
            "business_hours",
        )
        .with_keywords(["hours", "open", "closed", "time", "schedule"]),
        Entry::new(
            "How can I contact customer support?",
            "You can reach our customer support team via email at support@company.com, phone at 1-800-123-4567, or through this chat system 24/7.",
            "contact_support",
        )
        .with_keywords(["contact", "support", "help", "phone", "email"]),
        Entry::new(
            "What is your return policy?",
            "We offer a 30-day return policy for all products. Items must be in original condition with tags attached. Contact support to initiate a return.",
            "return_policy",
        )
        .with_keywords(["return", "refund", "exchange", "policy", "money back"]),
        Entry::new(
            "How do I track my order?",
            "You can track your order using the tracking number sent to your email, or log into your account and view order status in the 'My Orders' section.",
            "order_tracking",
        )
        .with_keywords(["track", "order", "shipping", "status", "delivery"]),
        Entry::new(
            "Do you offer international shipping?",
            "Yes, we ship internationally to over 50 countries. Shipping costs and delivery times vary by location. Check our shipping page for details.",
            "shipping_info",
        )
        .with_keywords(["international", "shipping", "delivery", "worldwide", "countries"]),
        Entry::new(
            "How do I reset my password?",
            "To reset your password, click 'Forgot Password' on the login page, enter your email address, and follow the instructions sent to your email.",
            "password_reset",
        )
        .with_keywords(["password", "reset", "forgot", "login", "account"]),
    ]
}
