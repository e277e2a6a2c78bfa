//! French string table.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Accueil"),
    ("nav.about", "À Propos"),
    ("nav.blog", "Articles"),
    ("nav.prehistoric", "Collections Préhistoriques"),
    ("nav.ethnographic", "Expositions Ethnographiques"),
    ("nav.exhibitions", "Expositions Spéciales"),
    ("nav.contact", "Contact"),
    // Home Page
    ("home.hero.title", "Musée National du Bardo"),
    ("home.hero.subtitle", "Découvrez le Riche Patrimoine Préhistorique et Ethnographique de l'Algérie"),
    ("home.mission.title", "Notre Mission"),
    ("home.mission.text", "Le Musée National du Bardo de Préhistoire et d'Ethnographie préserve et présente le patrimoine culturel algérien, des artefacts préhistoriques aux collections ethnographiques traditionnelles."),
    ("home.quickLinks.title", "Explorez Nos Collections"),
    ("home.hours.title", "Visitez-Nous"),
    ("home.hours.schedule", "Ouvert du samedi au jeudi, 9h00 - 17h00"),
    ("home.hours.address", "3 Rue Franklin Roosevelt, Alger, Algérie"),
    // About Page
    ("about.title", "À Propos du Musée"),
    ("about.history.title", "Histoire"),
    ("about.history.text", "Le Musée National du Bardo a été créé en 1930 et est situé dans une belle villa ottomane du XVIIIe siècle. Il abrite l'une des plus importantes collections d'artefacts préhistoriques et ethnographiques d'Afrique du Nord."),
    ("about.mission.title", "Mission et Objectif"),
    ("about.mission.text", "Notre mission est de préserver, étudier et présenter le riche patrimoine culturel de l'Algérie, des premiers établissements humains aux métiers et coutumes traditionnels."),
    ("about.collections.title", "Collections Principales"),
    ("about.collections.text", "Le musée présente des outils préhistoriques, de la poterie, des bijoux, des vêtements traditionnels, des instruments de musique et des objets rituels de diverses régions algériennes."),
    // Blog Page
    ("blog.title", "Articles et Recherches"),
    ("blog.readMore", "Lire Plus"),
    // Prehistoric Collections
    ("prehistoric.title", "Collections Préhistoriques"),
    ("prehistoric.intro", "Explorez les artefacts des périodes préhistoriques de l'Algérie, y compris les outils en pierre, la poterie et les bijoux anciens."),
    ("prehistoric.paleolithic.title", "Ère Paléolithique"),
    ("prehistoric.paleolithic.desc", "Outils en pierre et artefacts des premiers établissements humains en Afrique du Nord."),
    ("prehistoric.neolithic.title", "Ère Néolithique"),
    ("prehistoric.neolithic.desc", "Poterie, outils en pierre polie et preuves de l'agriculture précoce."),
    ("prehistoric.bronze.title", "Âge du Bronze"),
    ("prehistoric.bronze.desc", "Outils métalliques, armes et objets décoratifs."),
    // Ethnographic Exhibits
    ("ethnographic.title", "Expositions Ethnographiques"),
    ("ethnographic.intro", "Découvrez la culture algérienne traditionnelle à travers les vêtements, les outils et les objets rituels."),
    ("ethnographic.clothing.title", "Vêtements Traditionnels"),
    ("ethnographic.clothing.desc", "Costumes élaborés et textiles de différentes régions algériennes."),
    ("ethnographic.tools.title", "Outils Traditionnels"),
    ("ethnographic.tools.desc", "Outils agricoles et artisanaux utilisés dans la vie quotidienne."),
    ("ethnographic.ritual.title", "Objets Rituels"),
    ("ethnographic.ritual.desc", "Artefacts religieux et cérémoniels."),
    // Special Exhibitions
    ("exhibitions.title", "Expositions Spéciales"),
    ("exhibitions.current", "Exposition Actuelle"),
    ("exhibitions.upcoming", "Expositions à Venir"),
    ("exhibitions.past", "Expositions Passées"),
    // Contact Page
    ("contact.title", "Contactez-Nous"),
    ("contact.form.title", "Envoyez-nous un message"),
    ("contact.form.name", "Nom"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Sujet"),
    ("contact.form.message", "Message"),
    ("contact.form.submit", "Envoyer le Message"),
    ("contact.form.success", "Merci ! Votre message a été envoyé avec succès."),
    ("contact.form.error", "Désolé, une erreur s'est produite lors de l'envoi de votre message. Veuillez réessayer."),
    ("contact.info.title", "Informations du Musée"),
    ("contact.info.address", "Adresse"),
    ("contact.info.phone", "Téléphone"),
    ("contact.info.email", "Email"),
    ("contact.info.hours", "Heures d'Ouverture"),
    // AI Assistant
    ("ai.title", "Demandez au Guide du Musée"),
    ("ai.placeholder", "Posez des questions sur le musée, les collections ou les informations de visite..."),
    ("ai.send", "Envoyer"),
    ("ai.thinking", "Réflexion..."),
    ("ai.welcome", "Bonjour ! Je suis votre guide du musée. Posez-moi des questions sur le Musée du Bardo, nos collections ou les informations de visite."),
    // Footer
    ("footer.about", "À Propos"),
    ("footer.visit", "Visiter"),
    ("footer.follow", "Suivez-Nous"),
    ("footer.copyright", "© 2025 Musée National du Bardo. Tous droits réservés."),
    // Common
    ("common.learnMore", "En Savoir Plus"),
    ("common.close", "Fermer"),
    ("common.loading", "Chargement..."),
    // Site chrome and notifications
    ("contact.subtitle", "Nous serions ravis de vous entendre. Contactez-nous."),
    ("contact.form.description", "Remplissez le formulaire ci-dessous et nous vous répondrons dès que possible."),
    ("contact.form.required", "Veuillez remplir tous les champs"),
    ("notify.success", "Succès"),
    ("notify.error", "Erreur"),
    ("ai.error", "Impossible d'obtenir une réponse du guide du musée. Veuillez réessayer."),
    ("ai.open", "Ouvrir le guide du musée"),
    ("theme.toggle", "Changer de thème"),
    ("language.label", "Langue"),
    ("exhibitions.curator", "Commissaire"),
    ("exhibitions.location", "Lieu"),
    ("blog.by", "Par"),
    ("home.hero.cta", "Explorer les Collections"),
    ("exhibitions.intro", "Découvrez nos expositions spéciales actuelles et à venir"),
    ("blog.subtitle", "Regards sur le patrimoine culturel de l'Algérie"),
];
