//! Static catalogue: articles, exhibitions and collection highlights.

use chrono::{Datelike, NaiveDate};

use crate::i18n::Language;

/// A string carried in all three site languages.
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub en: &'static str,
    pub fr: &'static str,
    pub ar: &'static str,
}

impl Localized {
    #[must_use]
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Fr => self.fr,
            Language::Ar => self.ar,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub id: u32,
    pub title: Localized,
    pub excerpt: Localized,
    pub body: Localized,
    pub author: &'static str,
    /// ISO date (`YYYY-MM-DD`).
    pub date: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhibitionStatus {
    Current,
    Upcoming,
    Past,
}

impl ExhibitionStatus {
    /// Lowercase name used in CSS modifiers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }

    /// Translation key for the section heading.
    #[must_use]
    pub fn heading_key(self) -> &'static str {
        match self {
            Self::Current => "exhibitions.current",
            Self::Upcoming => "exhibitions.upcoming",
            Self::Past => "exhibitions.past",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Exhibition {
    pub id: u32,
    pub title: Localized,
    pub description: Localized,
    pub curator: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub status: ExhibitionStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct Artifact {
    pub name: Localized,
    pub description: Localized,
    pub image: &'static str,
}

/// A themed group of artifacts; title and description come from the string tables.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSection {
    pub id: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub artifacts: &'static [Artifact],
}

macro_rules! img {
    ($name:literal) => {
        concat!("https://miaoda-site-img.s3cdn.medo.dev/images/", $name, ".jpg")
    };
}

/// Hero image on the home page.
pub const HERO_IMAGE: &str = img!("d7483a0f-c51b-4539-a7ca-bc5b31860498");

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: Localized {
            en: "Origins of Prehistoric Artifacts in Algeria",
            fr: "Origines des Artefacts Préhistoriques en Algérie",
            ar: "أصول القطع الأثرية لعصور ما قبل التاريخ في الجزائر",
        },
        excerpt: Localized {
            en: "Explore the fascinating journey of prehistoric human settlements in Algeria and the artifacts they left behind.",
            fr: "Explorez le voyage fascinant des établissements humains préhistoriques en Algérie et les artefacts qu'ils ont laissés.",
            ar: "استكشف الرحلة الرائعة للمستوطنات البشرية في عصور ما قبل التاريخ في الجزائر والقطع الأثرية التي تركوها وراءهم.",
        },
        body: Localized {
            en: "Algeria has been inhabited by humans for over 2 million years, making it one of the oldest continuously inhabited regions in the world. The prehistoric collections at the Bardo Museum tell the story of these early inhabitants through their tools, pottery, and art. From the crude stone tools of the Lower Paleolithic to the sophisticated bronze weapons of the protohistoric period, each artifact provides a window into the lives of our ancestors. The Saharan rock art, dating back thousands of years, depicts hunting scenes, religious ceremonies, and daily life, offering invaluable insights into prehistoric North African culture.",
            fr: "L'Algérie est habitée par des humains depuis plus de 2 millions d'années, ce qui en fait l'une des régions continuellement habitées les plus anciennes du monde. Les collections préhistoriques du Musée du Bardo racontent l'histoire de ces premiers habitants à travers leurs outils, leur poterie et leur art. Des outils en pierre bruts du Paléolithique inférieur aux armes en bronze sophistiquées de la période protohistorique, chaque artefact offre une fenêtre sur la vie de nos ancêtres.",
            ar: "سكن البشر الجزائر منذ أكثر من 2 مليون سنة، مما يجعلها واحدة من أقدم المناطق المأهولة باستمرار في العالم. تحكي المجموعات ما قبل التاريخ في متحف باردو قصة هؤلاء السكان الأوائل من خلال أدواتهم وفخارهم وفنهم. من الأدوات الحجرية الخام من العصر الحجري القديم السفلي إلى الأسلحة البرونزية المتطورة من الفترة ما قبل التاريخية، توفر كل قطعة أثرية نافذة على حياة أسلافنا.",
        },
        author: "Dr. Amina Benali",
        date: "2024-11-15",
        category: "Prehistory",
        image: img!("7917167c-b630-4d27-b239-966376dcb7f9"),
    },
    Article {
        id: 2,
        title: Localized {
            en: "Traditional Algerian Ethnography Explained",
            fr: "L'Ethnographie Algérienne Traditionnelle Expliquée",
            ar: "شرح الإثنوغرافيا الجزائرية التقليدية",
        },
        excerpt: Localized {
            en: "Discover the rich tapestry of Algerian traditional culture through clothing, tools, and ceremonial objects.",
            fr: "Découvrez la riche tapisserie de la culture algérienne traditionnelle à travers les vêtements, les outils et les objets cérémoniels.",
            ar: "اكتشف النسيج الغني للثقافة الجزائرية التقليدية من خلال الملابس والأدوات والأشياء الاحتفالية.",
        },
        body: Localized {
            en: "Algeria's ethnographic heritage reflects the diverse cultures that have shaped the nation. The Bardo Museum's ethnographic collection showcases traditional clothing from different regions, each with distinctive styles and decorations. Kabyle dresses feature intricate embroidery and silver jewelry, while Saharan garments are adapted to desert life. Traditional tools reveal the ingenuity of Algerian craftspeople, from agricultural implements to weaving looms. Ceremonial objects, including wedding costumes and religious artifacts, demonstrate the importance of ritual and celebration in Algerian society. These collections preserve traditions that are rapidly disappearing in modern Algeria.",
            fr: "Le patrimoine ethnographique de l'Algérie reflète les diverses cultures qui ont façonné la nation. La collection ethnographique du Musée du Bardo présente des vêtements traditionnels de différentes régions, chacun avec des styles et des décorations distinctifs. Les robes kabyles présentent des broderies complexes et des bijoux en argent, tandis que les vêtements sahariens sont adaptés à la vie dans le désert.",
            ar: "يعكس التراث الإثنوغرافي للجزائر الثقافات المتنوعة التي شكلت الأمة. تعرض المجموعة الإثنوغرافية لمتحف باردو الملابس التقليدية من مناطق مختلفة، كل منها بأنماط وزخارف مميزة. تتميز الفساتين القبائلية بالتطريز المعقد والمجوهرات الفضية، بينما تتكيف الملابس الصحراوية مع الحياة في الصحراء.",
        },
        author: "Prof. Karim Messaoudi",
        date: "2024-10-22",
        category: "Ethnography",
        image: img!("5af57ce6-a90f-4546-a7e3-7b647d6066ff"),
    },
    Article {
        id: 3,
        title: Localized {
            en: "How the Museum Preserves Heritage",
            fr: "Comment le Musée Préserve le Patrimoine",
            ar: "كيف يحافظ المتحف على التراث",
        },
        excerpt: Localized {
            en: "Behind the scenes look at the conservation techniques used to protect Algeria's cultural treasures.",
            fr: "Un regard en coulisses sur les techniques de conservation utilisées pour protéger les trésors culturels de l'Algérie.",
            ar: "نظرة من وراء الكواليس على تقنيات الحفظ المستخدمة لحماية الكنوز الثقافية للجزائر.",
        },
        body: Localized {
            en: "Preserving cultural heritage requires constant vigilance and expertise. The Bardo Museum employs a team of conservators who use both traditional and modern techniques to protect the collections. Climate control is essential for preventing deterioration, with temperature and humidity carefully monitored in all storage and exhibition areas. Fragile textiles are stored in acid-free tissue paper and displayed in low-light conditions to prevent fading. Metal objects are treated to prevent corrosion, while pottery and stone artifacts are carefully cleaned and stabilized. The museum also maintains detailed documentation of each object, including photographs, condition reports, and provenance information. Digital preservation efforts ensure that even if physical objects deteriorate, their images and information will be preserved for future generations.",
            fr: "La préservation du patrimoine culturel nécessite une vigilance et une expertise constantes. Le Musée du Bardo emploie une équipe de conservateurs qui utilisent des techniques traditionnelles et modernes pour protéger les collections. Le contrôle climatique est essentiel pour prévenir la détérioration, avec une surveillance attentive de la température et de l'humidité dans toutes les zones de stockage et d'exposition.",
            ar: "يتطلب الحفاظ على التراث الثقافي يقظة وخبرة مستمرة. يوظف متحف باردو فريقًا من المحافظين الذين يستخدمون تقنيات تقليدية وحديثة لحماية المجموعات. يعد التحكم في المناخ ضروريًا لمنع التدهور، مع مراقبة دقيقة لدرجة الحرارة والرطوبة في جميع مناطق التخزين والعرض.",
        },
        author: "Leila Khelifi",
        date: "2024-09-10",
        category: "Conservation",
        image: img!("528f52bc-671b-4d7f-acd6-0231da02102e"),
    },
];

pub const EXHIBITIONS: &[Exhibition] = &[
    Exhibition {
        id: 1,
        title: Localized {
            en: "Treasures of the Sahara: Rock Art and Ancient Cultures",
            fr: "Trésors du Sahara : Art Rupestre et Cultures Anciennes",
            ar: "كنوز الصحراء: الفن الصخري والثقافات القديمة",
        },
        description: Localized {
            en: "Explore the magnificent rock art of the Sahara Desert, featuring reproductions and photographs from Tassili n'Ajjer and other important sites. This exhibition showcases the artistic achievements of prehistoric Saharan peoples and the dramatic environmental changes that transformed the region.",
            fr: "Explorez l'art rupestre magnifique du désert du Sahara, avec des reproductions et des photographies de Tassili n'Ajjer et d'autres sites importants. Cette exposition présente les réalisations artistiques des peuples sahariens préhistoriques et les changements environnementaux dramatiques qui ont transformé la région.",
            ar: "استكشف الفن الصخري الرائع لصحراء الصحراء، مع نسخ وصور من تاسيلي ناجر ومواقع مهمة أخرى. يعرض هذا المعرض الإنجازات الفنية للشعوب الصحراوية في عصور ما قبل التاريخ والتغيرات البيئية الدراماتيكية التي حولت المنطقة.",
        },
        curator: "Dr. Yasmine Benmohamed",
        start_date: "2024-09-01",
        end_date: "2025-03-31",
        location: "Main Gallery",
        image: img!("568d21c1-3ec1-4395-8f56-f2b5960093ea"),
        status: ExhibitionStatus::Current,
    },
    Exhibition {
        id: 2,
        title: Localized {
            en: "Berber Silver: Jewelry and Identity",
            fr: "Argent Berbère : Bijoux et Identité",
            ar: "الفضة البربرية: المجوهرات والهوية",
        },
        description: Localized {
            en: "A stunning collection of traditional Berber silver jewelry from across Algeria. This exhibition explores how jewelry serves as both personal adornment and cultural expression, with pieces from Kabylia, the Aurès, and the Sahara. Each region's distinctive styles and techniques are highlighted.",
            fr: "Une collection époustouflante de bijoux en argent berbère traditionnels de toute l'Algérie. Cette exposition explore comment les bijoux servent à la fois de parure personnelle et d'expression culturelle, avec des pièces de Kabylie, des Aurès et du Sahara. Les styles et techniques distinctifs de chaque région sont mis en évidence.",
            ar: "مجموعة مذهلة من المجوهرات الفضية البربرية التقليدية من جميع أنحاء الجزائر. يستكشف هذا المعرض كيف تعمل المجوهرات كزينة شخصية وتعبير ثقافي، مع قطع من القبائل والأوراس والصحراء. يتم تسليط الضوء على الأساليب والتقنيات المميزة لكل منطقة.",
        },
        curator: "Fatima Cherif",
        start_date: "2025-04-15",
        end_date: "2025-09-30",
        location: "East Wing",
        image: img!("05e74397-cea2-4bdf-87c8-ce5f4eaa4662"),
        status: ExhibitionStatus::Upcoming,
    },
    Exhibition {
        id: 3,
        title: Localized {
            en: "Women's Work: Traditional Textiles of Algeria",
            fr: "Travail des Femmes : Textiles Traditionnels d'Algérie",
            ar: "عمل النساء: المنسوجات التقليدية للجزائر",
        },
        description: Localized {
            en: "Celebrating the artistry of Algerian women weavers and embroiderers. This exhibition features carpets, clothing, and decorative textiles from various regions, highlighting the technical skill and artistic vision of female artisans. Traditional techniques and contemporary adaptations are both represented.",
            fr: "Célébrant l'art des tisserandes et brodeuses algériennes. Cette exposition présente des tapis, des vêtements et des textiles décoratifs de diverses régions, mettant en évidence la compétence technique et la vision artistique des artisanes. Les techniques traditionnelles et les adaptations contemporaines sont toutes deux représentées.",
            ar: "احتفالاً بفن النساجات والمطرزات الجزائريات. يعرض هذا المعرض السجاد والملابس والمنسوجات الزخرفية من مناطق مختلفة، مع تسليط الضوء على المهارة التقنية والرؤية الفنية للحرفيات. يتم تمثيل التقنيات التقليدية والتكيفات المعاصرة على حد سواء.",
        },
        curator: "Leila Mansouri",
        start_date: "2025-10-01",
        end_date: "2026-02-28",
        location: "West Wing",
        image: img!("aa030a74-5456-488b-981a-618eba403165"),
        status: ExhibitionStatus::Upcoming,
    },
    Exhibition {
        id: 4,
        title: Localized {
            en: "Neolithic Revolution in North Africa",
            fr: "Révolution Néolithique en Afrique du Nord",
            ar: "الثورة النيوليتية في شمال أفريقيا",
        },
        description: Localized {
            en: "This past exhibition explored the transition from hunter-gatherer societies to agricultural communities in prehistoric Algeria. Featuring pottery, tools, and evidence of early domestication, it illustrated one of humanity's most important cultural transformations.",
            fr: "Cette exposition passée a exploré la transition des sociétés de chasseurs-cueilleurs aux communautés agricoles dans l'Algérie préhistorique. Présentant de la poterie, des outils et des preuves de domestication précoce, elle a illustré l'une des transformations culturelles les plus importantes de l'humanité.",
            ar: "استكشف هذا المعرض السابق الانتقال من مجتمعات الصيد والجمع إلى المجتمعات الزراعية في الجزائر في عصور ما قبل التاريخ. من خلال عرض الفخار والأدوات وأدلة على التدجين المبكر، وضح أحد أهم التحولات الثقافية للبشرية.",
        },
        curator: "Prof. Ahmed Benali",
        start_date: "2024-01-15",
        end_date: "2024-06-30",
        location: "Main Gallery",
        image: img!("02901782-655f-4d02-a8ec-841fe94e6433"),
        status: ExhibitionStatus::Past,
    },
];

pub const PREHISTORIC: &[CollectionSection] = &[
    CollectionSection {
        id: "paleolithic",
        title_key: "prehistoric.paleolithic.title",
        description_key: "prehistoric.paleolithic.desc",
        artifacts: &[
            Artifact {
                name: Localized { en: "Hand Axes", fr: "Haches à Main", ar: "الفؤوس اليدوية" },
                description: Localized {
                    en: "Stone tools from Lower Paleolithic period, over 1 million years old",
                    fr: "Outils en pierre du Paléolithique inférieur, vieux de plus d'un million d'années",
                    ar: "أدوات حجرية من العصر الحجري القديم السفلي، عمرها أكثر من مليون سنة",
                },
                image: img!("7917167c-b630-4d27-b239-966376dcb7f9"),
            },
            Artifact {
                name: Localized { en: "Scrapers and Blades", fr: "Grattoirs et Lames", ar: "الكاشطات والشفرات" },
                description: Localized {
                    en: "Refined stone tools used for cutting and processing materials",
                    fr: "Outils en pierre raffinés utilisés pour couper et traiter les matériaux",
                    ar: "أدوات حجرية مصقولة تستخدم للقطع ومعالجة المواد",
                },
                image: img!("f6bada96-5e17-4b0b-9be1-e36cd4ee092e"),
            },
        ],
    },
    CollectionSection {
        id: "neolithic",
        title_key: "prehistoric.neolithic.title",
        description_key: "prehistoric.neolithic.desc",
        artifacts: &[
            Artifact {
                name: Localized { en: "Decorated Pottery", fr: "Poterie Décorée", ar: "الفخار المزخرف" },
                description: Localized {
                    en: "Ceramic vessels with geometric patterns, evidence of settled communities",
                    fr: "Récipients en céramique avec des motifs géométriques, preuve de communautés sédentaires",
                    ar: "أواني خزفية بأنماط هندسية، دليل على المجتمعات المستقرة",
                },
                image: img!("02901782-655f-4d02-a8ec-841fe94e6433"),
            },
            Artifact {
                name: Localized { en: "Polished Stone Tools", fr: "Outils en Pierre Polie", ar: "الأدوات الحجرية المصقولة" },
                description: Localized {
                    en: "Advanced tools including axes, adzes, and grinding stones",
                    fr: "Outils avancés comprenant des haches, des herminettes et des meules",
                    ar: "أدوات متقدمة بما في ذلك الفؤوس والمعاول وحجارة الطحن",
                },
                image: img!("98fd2c1a-e567-477a-8190-98ea21992360"),
            },
            Artifact {
                name: Localized { en: "Neolithic Jewelry", fr: "Bijoux Néolithiques", ar: "مجوهرات العصر الحجري الحديث" },
                description: Localized {
                    en: "Beads and ornaments made from stone, shell, and bone",
                    fr: "Perles et ornements en pierre, coquillage et os",
                    ar: "خرز وزخارف مصنوعة من الحجر والصدف والعظام",
                },
                image: img!("2bdbab32-4f87-4a02-872b-149e22a7d5de"),
            },
        ],
    },
    CollectionSection {
        id: "bronze",
        title_key: "prehistoric.bronze.title",
        description_key: "prehistoric.bronze.desc",
        artifacts: &[
            Artifact {
                name: Localized { en: "Bronze Weapons", fr: "Armes en Bronze", ar: "الأسلحة البرونزية" },
                description: Localized {
                    en: "Daggers, spearheads, and arrowheads from the protohistoric period",
                    fr: "Poignards, pointes de lance et pointes de flèche de la période protohistorique",
                    ar: "خناجر ورؤوس رماح وسهام من الفترة ما قبل التاريخية",
                },
                image: img!("ce8b992c-dae3-4db2-90f2-d1321fc22d64"),
            },
            Artifact {
                name: Localized { en: "Bronze Jewelry", fr: "Bijoux en Bronze", ar: "المجوهرات البرونزية" },
                description: Localized {
                    en: "Bracelets, fibulae, and decorative pins showing advanced metalworking",
                    fr: "Bracelets, fibules et épingles décoratives montrant un travail du métal avancé",
                    ar: "أساور ودبابيس زخرفية تظهر صناعة معادن متقدمة",
                },
                image: img!("05e74397-cea2-4bdf-87c8-ce5f4eaa4662"),
            },
        ],
    },
];

pub const ETHNOGRAPHIC: &[CollectionSection] = &[
    CollectionSection {
        id: "clothing",
        title_key: "ethnographic.clothing.title",
        description_key: "ethnographic.clothing.desc",
        artifacts: &[
            Artifact {
                name: Localized { en: "Kabyle Wedding Dress", fr: "Robe de Mariée Kabyle", ar: "فستان زفاف قبائلي" },
                description: Localized {
                    en: "Elaborate silk dress with intricate embroidery and silver jewelry",
                    fr: "Robe en soie élaborée avec broderie complexe et bijoux en argent",
                    ar: "فستان حريري متقن مع تطريز معقد ومجوهرات فضية",
                },
                image: img!("866bcead-8865-4aa8-8466-91d563ddde13"),
            },
            Artifact {
                name: Localized { en: "Saharan Tuareg Clothing", fr: "Vêtements Touareg Sahariens", ar: "ملابس الطوارق الصحراوية" },
                description: Localized {
                    en: "Traditional indigo-dyed robes and veils adapted to desert life",
                    fr: "Robes et voiles traditionnels teints à l'indigo adaptés à la vie désertique",
                    ar: "أردية وحجاب تقليدية مصبوغة بالنيلي متكيفة مع الحياة الصحراوية",
                },
                image: img!("f8fd11b7-09b8-4533-98ed-4a7be3bb801a"),
            },
            Artifact {
                name: Localized { en: "Algiers Traditional Costume", fr: "Costume Traditionnel d'Alger", ar: "الزي التقليدي للجزائر العاصمة" },
                description: Localized {
                    en: "Urban Ottoman-influenced clothing with gold embroidery",
                    fr: "Vêtements urbains d'influence ottomane avec broderie dorée",
                    ar: "ملابس حضرية متأثرة بالعثمانيين مع تطريز ذهبي",
                },
                image: img!("866bcead-8865-4aa8-8466-91d563ddde13"),
            },
        ],
    },
    CollectionSection {
        id: "tools",
        title_key: "ethnographic.tools.title",
        description_key: "ethnographic.tools.desc",
        artifacts: &[
            Artifact {
                name: Localized { en: "Weaving Loom", fr: "Métier à Tisser", ar: "نول النسيج" },
                description: Localized {
                    en: "Traditional wooden loom used for creating carpets and textiles",
                    fr: "Métier à tisser en bois traditionnel utilisé pour créer des tapis et des textiles",
                    ar: "نول خشبي تقليدي يستخدم لصنع السجاد والمنسوجات",
                },
                image: img!("aa030a74-5456-488b-981a-618eba403165"),
            },
            Artifact {
                name: Localized { en: "Agricultural Tools", fr: "Outils Agricoles", ar: "الأدوات الزراعية" },
                description: Localized {
                    en: "Plows, sickles, and harvesting tools used in traditional farming",
                    fr: "Charrues, faucilles et outils de récolte utilisés dans l'agriculture traditionnelle",
                    ar: "محاريث ومناجل وأدوات حصاد تستخدم في الزراعة التقليدية",
                },
                image: img!("017bee28-abcd-4f01-84fc-4aff31c6f9f0"),
            },
            Artifact {
                name: Localized { en: "Pottery Tools", fr: "Outils de Poterie", ar: "أدوات الفخار" },
                description: Localized {
                    en: "Traditional pottery wheels and shaping tools",
                    fr: "Tours de potier traditionnels et outils de façonnage",
                    ar: "عجلات الفخار التقليدية وأدوات التشكيل",
                },
                image: img!("d34646d9-78aa-4c34-ad63-32bad4b2c0d0"),
            },
        ],
    },
    CollectionSection {
        id: "ritual",
        title_key: "ethnographic.ritual.title",
        description_key: "ethnographic.ritual.desc",
        artifacts: &[
            Artifact {
                name: Localized { en: "Wedding Jewelry", fr: "Bijoux de Mariage", ar: "مجوهرات الزفاف" },
                description: Localized {
                    en: "Silver and coral jewelry worn during wedding ceremonies",
                    fr: "Bijoux en argent et corail portés lors des cérémonies de mariage",
                    ar: "مجوهرات فضية ومرجانية ترتدى خلال حفلات الزفاف",
                },
                image: img!("05e74397-cea2-4bdf-87c8-ce5f4eaa4662"),
            },
            Artifact {
                name: Localized { en: "Musical Instruments", fr: "Instruments de Musique", ar: "الآلات الموسيقية" },
                description: Localized {
                    en: "Traditional drums, flutes, and string instruments",
                    fr: "Tambours, flûtes et instruments à cordes traditionnels",
                    ar: "طبول وناي وآلات وترية تقليدية",
                },
                image: img!("606204f2-861b-4084-a53f-c5691bf787bf"),
            },
            Artifact {
                name: Localized { en: "Religious Artifacts", fr: "Artefacts Religieux", ar: "القطع الأثرية الدينية" },
                description: Localized {
                    en: "Prayer beads, amulets, and ceremonial objects",
                    fr: "Chapelets, amulettes et objets cérémoniels",
                    ar: "مسابح وتمائم وأشياء احتفالية",
                },
                image: img!("05e74397-cea2-4bdf-87c8-ce5f4eaa4662"),
            },
        ],
    },
];

/// Home page collection shortcuts: (path, title key, description key, image).
pub const QUICK_LINKS: &[(&str, &str, &str, &str)] = &[
    ("/prehistoric", "nav.prehistoric", "prehistoric.intro", img!("02901782-655f-4d02-a8ec-841fe94e6433")),
    ("/ethnographic", "nav.ethnographic", "ethnographic.intro", img!("5af57ce6-a90f-4546-a7e3-7b647d6066ff")),
    ("/exhibitions", "nav.exhibitions", "exhibitions.intro", img!("528f52bc-671b-4d7f-acd6-0231da02102e")),
];

/// Exhibitions with the given status, in catalogue order.
pub fn exhibitions_with_status(status: ExhibitionStatus) -> impl Iterator<Item = &'static Exhibition> {
    EXHIBITIONS.iter().filter(move |e| e.status == status)
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];
const MONTHS_AR: [&str; 12] = [
    "جانفي", "فيفري", "مارس", "أفريل", "ماي", "جوان", "جويلية", "أوت", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

/// Long-form date in the conventions of `language`. Unparseable input is returned as is.
#[must_use]
pub fn format_date(iso: &str, language: Language) -> String {
    let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") else {
        return iso.to_string();
    };
    let month = date.month0() as usize;
    match language {
        Language::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Language::Fr => format!("{} {} {}", date.day(), MONTHS_FR[month], date.year()),
        Language::Ar => format!("{} {} {}", date.day(), MONTHS_AR[month], date.year()),
    }
}
