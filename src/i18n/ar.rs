//! Arabic string table.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.about", "عن المتحف"),
    ("nav.blog", "المقالات"),
    ("nav.prehistoric", "المجموعات ما قبل التاريخ"),
    ("nav.ethnographic", "المعروضات الإثنوغرافية"),
    ("nav.exhibitions", "المعارض الخاصة"),
    ("nav.contact", "اتصل بنا"),
    // Home Page
    ("home.hero.title", "المتحف الوطني باردو"),
    ("home.hero.subtitle", "اكتشف التراث الجزائري الغني من عصور ما قبل التاريخ والإثنوغرافيا"),
    ("home.mission.title", "مهمتنا"),
    ("home.mission.text", "يحافظ المتحف الوطني باردو لعصور ما قبل التاريخ والإثنوغرافيا على التراث الثقافي الجزائري ويعرضه، من القطع الأثرية لعصور ما قبل التاريخ إلى المجموعات الإثنوغرافية التقليدية."),
    ("home.quickLinks.title", "استكشف مجموعاتنا"),
    ("home.hours.title", "قم بزيارتنا"),
    ("home.hours.schedule", "مفتوح من السبت إلى الخميس، 9:00 صباحًا - 5:00 مساءً"),
    ("home.hours.address", "3 شارع فرانكلين روزفلت، الجزائر العاصمة، الجزائر"),
    // About Page
    ("about.title", "عن المتحف"),
    ("about.history.title", "التاريخ"),
    ("about.history.text", "تأسس المتحف الوطني باردو عام 1930 ويقع في فيلا عثمانية جميلة من القرن الثامن عشر. يضم واحدة من أهم مجموعات القطع الأثرية لعصور ما قبل التاريخ والإثنوغرافية في شمال أفريقيا."),
    ("about.mission.title", "المهمة والغرض"),
    ("about.mission.text", "مهمتنا هي الحفاظ على التراث الثقافي الجزائري الغني ودراسته وتقديمه، من أقدم المستوطنات البشرية إلى الحرف والعادات التقليدية."),
    ("about.collections.title", "المجموعات الرئيسية"),
    ("about.collections.text", "يعرض المتحف أدوات ما قبل التاريخ الواسعة، والفخار، والمجوهرات، والملابس التقليدية، والآلات الموسيقية، والأشياء الطقسية من مختلف المناطق الجزائرية."),
    // Blog Page
    ("blog.title", "المقالات والأبحاث"),
    ("blog.readMore", "اقرأ المزيد"),
    // Prehistoric Collections
    ("prehistoric.title", "مجموعات ما قبل التاريخ"),
    ("prehistoric.intro", "استكشف القطع الأثرية من فترات ما قبل التاريخ في الجزائر، بما في ذلك الأدوات الحجرية والفخار والمجوهرات القديمة."),
    ("prehistoric.paleolithic.title", "العصر الحجري القديم"),
    ("prehistoric.paleolithic.desc", "الأدوات الحجرية والقطع الأثرية من أقدم المستوطنات البشرية في شمال أفريقيا."),
    ("prehistoric.neolithic.title", "العصر الحجري الحديث"),
    ("prehistoric.neolithic.desc", "الفخار والأدوات الحجرية المصقولة وأدلة على الزراعة المبكرة."),
    ("prehistoric.bronze.title", "العصر البرونزي"),
    ("prehistoric.bronze.desc", "الأدوات المعدنية والأسلحة والأشياء الزخرفية."),
    // Ethnographic Exhibits
    ("ethnographic.title", "المعروضات الإثنوغرافية"),
    ("ethnographic.intro", "اكتشف الثقافة الجزائرية التقليدية من خلال الملابس والأدوات والأشياء الطقسية."),
    ("ethnographic.clothing.title", "الملابس التقليدية"),
    ("ethnographic.clothing.desc", "أزياء ومنسوجات متقنة من مختلف المناطق الجزائرية."),
    ("ethnographic.tools.title", "الأدوات التقليدية"),
    ("ethnographic.tools.desc", "الأدوات الزراعية والحرفية المستخدمة في الحياة اليومية."),
    ("ethnographic.ritual.title", "الأشياء الطقسية"),
    ("ethnographic.ritual.desc", "القطع الأثرية الدينية والاحتفالية."),
    // Special Exhibitions
    ("exhibitions.title", "المعارض الخاصة"),
    ("exhibitions.current", "المعرض الحالي"),
    ("exhibitions.upcoming", "المعارض القادمة"),
    ("exhibitions.past", "المعارض السابقة"),
    // Contact Page
    ("contact.title", "اتصل بنا"),
    ("contact.form.title", "أرسل لنا رسالة"),
    ("contact.form.name", "الاسم"),
    ("contact.form.email", "البريد الإلكتروني"),
    ("contact.form.subject", "الموضوع"),
    ("contact.form.message", "الرسالة"),
    ("contact.form.submit", "إرسال الرسالة"),
    ("contact.form.success", "شكرًا لك! تم إرسال رسالتك بنجاح."),
    ("contact.form.error", "عذرًا، حدث خطأ أثناء إرسال رسالتك. يرجى المحاولة مرة أخرى."),
    ("contact.info.title", "معلومات المتحف"),
    ("contact.info.address", "العنوان"),
    ("contact.info.phone", "الهاتف"),
    ("contact.info.email", "البريد الإلكتروني"),
    ("contact.info.hours", "ساعات العمل"),
    // AI Assistant
    ("ai.title", "اسأل مرشد المتحف"),
    ("ai.placeholder", "اسأل عن المتحف أو المجموعات أو معلومات الزيارة..."),
    ("ai.send", "إرسال"),
    ("ai.thinking", "جاري التفكير..."),
    ("ai.welcome", "مرحبًا! أنا مرشدك في المتحف. اسألني أي شيء عن متحف باردو أو مجموعاتنا أو معلومات الزيارة."),
    // Footer
    ("footer.about", "عن المتحف"),
    ("footer.visit", "زيارة"),
    ("footer.follow", "تابعنا"),
    ("footer.copyright", "© 2025 المتحف الوطني باردو. جميع الحقوق محفوظة."),
    // Common
    ("common.learnMore", "اعرف المزيد"),
    ("common.close", "إغلاق"),
    ("common.loading", "جاري التحميل..."),
    // Site chrome and notifications
    ("contact.subtitle", "يسعدنا أن نسمع منك. تواصل معنا."),
    ("contact.form.description", "املأ النموذج أدناه وسنعود إليك في أقرب وقت ممكن."),
    ("contact.form.required", "يرجى ملء جميع الحقول"),
    ("notify.success", "تم بنجاح"),
    ("notify.error", "خطأ"),
    ("ai.error", "تعذر الحصول على رد من مرشد المتحف. يرجى المحاولة مرة أخرى."),
    ("ai.open", "افتح مرشد المتحف"),
    ("theme.toggle", "تبديل السمة"),
    ("language.label", "اللغة"),
    ("exhibitions.curator", "المنسق"),
    ("exhibitions.location", "الموقع"),
    ("blog.by", "بقلم"),
    ("home.hero.cta", "استكشف المجموعات"),
    ("exhibitions.intro", "اكتشف معارضنا الخاصة الحالية والقادمة"),
    ("blog.subtitle", "رؤى حول التراث الثقافي للجزائر"),
];
