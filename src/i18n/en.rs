//! English string table.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.blog", "Articles"),
    ("nav.prehistoric", "Prehistoric Collections"),
    ("nav.ethnographic", "Ethnographic Exhibits"),
    ("nav.exhibitions", "Special Exhibitions"),
    ("nav.contact", "Contact"),
    // Home Page
    ("home.hero.title", "Bardo National Museum"),
    ("home.hero.subtitle", "Discover Algeria's Rich Prehistoric and Ethnographic Heritage"),
    ("home.mission.title", "Our Mission"),
    ("home.mission.text", "The Bardo National Museum of Prehistory and Ethnography preserves and showcases Algeria's cultural heritage, from prehistoric artifacts to traditional ethnographic collections."),
    ("home.quickLinks.title", "Explore Our Collections"),
    ("home.hours.title", "Visit Us"),
    ("home.hours.schedule", "Open Saturday to Thursday, 9:00 AM - 5:00 PM"),
    ("home.hours.address", "3 Rue Franklin Roosevelt, Algiers, Algeria"),
    // About Page
    ("about.title", "About the Museum"),
    ("about.history.title", "History"),
    ("about.history.text", "The Bardo National Museum was established in 1930 and is located in a beautiful 18th-century Ottoman villa. It houses one of the most important collections of prehistoric and ethnographic artifacts in North Africa."),
    ("about.mission.title", "Mission & Purpose"),
    ("about.mission.text", "Our mission is to preserve, study, and present Algeria's rich cultural heritage, from the earliest human settlements to traditional crafts and customs."),
    ("about.collections.title", "Major Collections"),
    ("about.collections.text", "The museum features extensive prehistoric tools, pottery, jewelry, traditional clothing, musical instruments, and ritual objects from various Algerian regions."),
    // Blog Page
    ("blog.title", "Articles & Research"),
    ("blog.readMore", "Read More"),
    // Prehistoric Collections
    ("prehistoric.title", "Prehistoric Collections"),
    ("prehistoric.intro", "Explore artifacts from Algeria's prehistoric periods, including stone tools, pottery, and ancient jewelry."),
    ("prehistoric.paleolithic.title", "Paleolithic Era"),
    ("prehistoric.paleolithic.desc", "Stone tools and artifacts from the earliest human settlements in North Africa."),
    ("prehistoric.neolithic.title", "Neolithic Era"),
    ("prehistoric.neolithic.desc", "Pottery, polished stone tools, and evidence of early agriculture."),
    ("prehistoric.bronze.title", "Bronze Age"),
    ("prehistoric.bronze.desc", "Metal tools, weapons, and decorative objects."),
    // Ethnographic Exhibits
    ("ethnographic.title", "Ethnographic Exhibits"),
    ("ethnographic.intro", "Discover traditional Algerian culture through clothing, tools, and ritual objects."),
    ("ethnographic.clothing.title", "Traditional Clothing"),
    ("ethnographic.clothing.desc", "Elaborate costumes and textiles from different Algerian regions."),
    ("ethnographic.tools.title", "Traditional Tools"),
    ("ethnographic.tools.desc", "Agricultural and craft tools used in daily life."),
    ("ethnographic.ritual.title", "Ritual Objects"),
    ("ethnographic.ritual.desc", "Religious and ceremonial artifacts."),
    // Special Exhibitions
    ("exhibitions.title", "Special Exhibitions"),
    ("exhibitions.current", "Current Exhibition"),
    ("exhibitions.upcoming", "Upcoming Exhibitions"),
    ("exhibitions.past", "Past Exhibitions"),
    // Contact Page
    ("contact.title", "Contact Us"),
    ("contact.form.title", "Send us a message"),
    ("contact.form.name", "Name"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Subject"),
    ("contact.form.message", "Message"),
    ("contact.form.submit", "Send Message"),
    ("contact.form.success", "Thank you! Your message has been sent successfully."),
    ("contact.form.error", "Sorry, there was an error sending your message. Please try again."),
    ("contact.info.title", "Museum Information"),
    ("contact.info.address", "Address"),
    ("contact.info.phone", "Phone"),
    ("contact.info.email", "Email"),
    ("contact.info.hours", "Opening Hours"),
    // AI Assistant
    ("ai.title", "Ask Museum Guide"),
    ("ai.placeholder", "Ask about the museum, collections, or visiting information..."),
    ("ai.send", "Send"),
    ("ai.thinking", "Thinking..."),
    ("ai.welcome", "Hello! I'm your museum guide. Ask me anything about the Bardo Museum, our collections, or visiting information."),
    // Footer
    ("footer.about", "About"),
    ("footer.visit", "Visit"),
    ("footer.follow", "Follow Us"),
    ("footer.copyright", "© 2025 Bardo National Museum. All rights reserved."),
    // Common
    ("common.learnMore", "Learn More"),
    ("common.close", "Close"),
    ("common.loading", "Loading..."),
    // Site chrome and notifications
    ("contact.subtitle", "We'd love to hear from you. Get in touch with us."),
    ("contact.form.description", "Fill out the form below and we'll get back to you as soon as possible."),
    ("contact.form.required", "Please fill in all fields"),
    ("notify.success", "Success"),
    ("notify.error", "Error"),
    ("ai.error", "Failed to get response from the museum guide. Please try again."),
    ("ai.open", "Open museum guide"),
    ("theme.toggle", "Toggle theme"),
    ("language.label", "Language"),
    ("exhibitions.curator", "Curator"),
    ("exhibitions.location", "Location"),
    ("blog.by", "By"),
    ("home.hero.cta", "Explore Collections"),
    ("exhibitions.intro", "Discover our current and upcoming special exhibitions"),
    ("blog.subtitle", "Insights into Algeria's Cultural Heritage"),
];
