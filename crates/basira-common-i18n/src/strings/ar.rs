// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Arabic strings.

pub(crate) const AR: &[(&str, &str)] = &[
	// Header
	("header.title", "بصيرة قرآنية"),
	("header.howItWorks", "كيف يعمل"),
	("header.features", "المميزات"),
	("header.explore", "استكشف"),
	("header.library", "مكتبتي"),
	("header.signIn", "تسجيل الدخول"),
	("header.getStarted", "ابدأ الآن"),
	// Explore
	("explore.title", "استكشف السور"),
	("explore.subtitle", "اكتشف رؤى شخصية من جميع السور الـ 114"),
	("explore.search", "البحث بالاسم أو الرقم أو الموضوع..."),
	("explore.verses", "آيات"),
	("explore.insights", "رؤى شخصية"),
	("explore.exploreBtn", "استكشف ←"),
	// Library
	("library.title", "مكتبة حكمتك"),
	(
		"library.subtitle",
		"تتبع ممارساتك النشطة، وأرشف المكتملة، واحفظ الإلهام",
	),
	("library.active", "نشط"),
	("library.archived", "مؤرشف"),
	("library.saved", "محفوظ"),
	("library.noItems", "لا توجد عناصر بعد. ابدأ باستكشاف السور لإضافة رؤى!"),
	("library.added", "أضيف في"),
	("library.actionPlan", "خطة العمل"),
	("library.what", "ماذا:"),
	("library.when", "متى:"),
	("library.frequency", "التكرار:"),
	("library.success", "النجاح يبدو كالتالي:"),
	("library.reflections", "تأملاتك"),
	("library.edit", "تعديل"),
	("library.save", "حفظ"),
	("library.cancel", "إلغاء"),
	(
		"library.noReflections",
		"لا توجد تأملات بعد. انقر على تعديل لإضافة أفكارك.",
	),
	("library.notesPlaceholder", "كيف تسير هذه الممارسة؟ ماذا لاحظت؟"),
	// Surah Detail
	("surah.backToExplore", "العودة إلى الاستكشاف"),
	("surah.number", "سورة"),
	("surah.verses", "آيات"),
	("surah.read", "قراءة"),
	("surah.personalizedInsights", "رؤى شخصية"),
	("surah.keyThemes", "المواضيع الرئيسية"),
	("surah.revelationContext", "سياق النزول"),
	("surah.tailoredTitle", "رؤى مصممة لك"),
	("surah.whyMatters", "لماذا هذا مهم لك"),
	("surah.reflectionPrompt", "مطالبة التأمل"),
	("surah.addToLibrary", "أضف إلى مكتبتي"),
	("surah.actionTitle", "صمم خطة عملك"),
	("surah.actionDesc", "حول هذه الرؤية إلى ممارسة ملموسة وقابلة للقياس"),
	("surah.whatLabel", "ماذا ستفعل؟"),
	(
		"surah.whatPlaceholder",
		"مثال: عندما أشعر بالقلق، سأتوقف وأدعو قبل اتخاذ أي إجراء...",
	),
	("surah.whenLabel", "متى؟"),
	("surah.whenPlaceholder", "مثال: الصباح، بعد الفجر..."),
	("surah.frequencyLabel", "كم مرة؟"),
	("surah.frequencyPlaceholder", "مثال: يوميًا، أسبوعيًا..."),
	("surah.metricsLabel", "كيف ستعرف أنه يعمل؟"),
	(
		"surah.metricsPlaceholder",
		"مثال: أشعر بالهدوء، تتحسن علاقاتي، أنام بشكل أفضل...",
	),
	("surah.saveLibrary", "حفظ في المكتبة"),
	// How It Works
	("how.title", "كيف يعمل"),
	("how.subtitle", "عملية هادئة ومتأنية من الرؤية إلى التنفيذ"),
	("how.step1Title", "شارك سياقك"),
	(
		"how.step1Desc",
		"أخبرنا عن قيمك ومرحلة حياتك وتحدياتك وأهدافك الروحية من خلال اختبار مدروس.",
	),
	("how.step2Title", "تلقَّ الرؤى"),
	(
		"how.step2Desc",
		"احصل على حكمة قرآنية شخصية مع مراجع الآيات والترجمات والسياق المصمم لحياتك.",
	),
	("how.step3Title", "صمم عملك"),
	(
		"how.step3Desc",
		"حول الرؤى إلى خطط عمل ملموسة مع ما ومتى وكيف ومقاييس النجاح التي تحددها.",
	),
	("how.step4Title", "تأمل وانمُ"),
	(
		"how.step4Desc",
		"دوّن تجاربك، وتتبع تأملاتك، ودع الحكمة تتعمق مع مرور الوقت.",
	),
	// Features
	("features.title", "المميزات الأساسية"),
	(
		"features.subtitle",
		"كل ما تحتاجه لتحويل الحكمة القرآنية إلى ممارسة معاشة",
	),
	("features.surahTitle", "استكشاف السور"),
	(
		"features.surahDesc",
		"تصفح جميع السور الـ 114 مع سياق مكي/مدني والمواضيع وخلفية النزول. شاهد وقت القراءة المقدر وعدد الرؤى الشخصية.",
	),
	("features.insightTitle", "رؤى شخصية"),
	(
		"features.insightDesc",
		"تحليل مدعوم بالذكاء الاصطناعي يربط الآيات القرآنية بسياق حياتك. تتضمن كل رؤية مرجع الآية والنص العربي والترجمة والصلة.",
	),
	("features.libraryTitle", "مكتبة حكمتك"),
	(
		"features.libraryDesc",
		"نظم الرؤى إلى نشطة ومؤرشفة ومحفوظة. أضف ملاحظات ووسوم مجالات الحياة وتصاميم التنفيذ. نموك الروحي، متتبع.",
	),
	("features.reflectionTitle", "مطالبات التأمل"),
	(
		"features.reflectionDesc",
		"تساعدك المطالبات اليومية والأسبوعية على التوقف والتأمل والتدوين. محرر نصوص غني للتأمل العميق في كيفية ظهور الرؤى.",
	),
	("features.reminderTitle", "تذكيرات ذكية"),
	(
		"features.reminderDesc",
		"تكامل التقويم وخطافات الإشعارات (واتساب، تيليجرام) تحافظ على نشاط الرؤى. وضع التركيز للتأمل بدون تشتيت.",
	),
	("features.searchTitle", "الاكتشاف والبحث"),
	(
		"features.searchDesc",
		"ابحث عن الحكمة حسب الموضوع أو وضع الحياة أو السورة أو الآية. صفِّ حسب الحالة النشطة/المؤرشفة. اظهر الإرشاد الذي تحتاجه، عندما تحتاجه.",
	),
	// Transparency
	("transparency.title", "الثقة والشفافية"),
	("transparency.subtitle", "مبني بأمانة واحترام للنص المقدس"),
	("transparency.scholarTitle", "ذكاء اصطناعي مدعوم من العلماء"),
	(
		"transparency.scholarDesc",
		"ذكاؤنا الاصطناعي مدرب على ترجمات قرآنية موثقة وتفسير كلاسيكي. كل رؤية تشير إلى مصادر أصيلة.",
	),
	("transparency.metricsTitle", "لا مقاييس أداء"),
	(
		"transparency.metricsDesc",
		"لا إعجابات، لا سلاسل، لا لوحات صدارة عامة. رحلتك الروحية بينك وبين الله.",
	),
	("transparency.processTitle", "عملية شفافة"),
	(
		"transparency.processDesc",
		"انظر بالضبط كيف يتم إنشاء الرؤى - مراجع الآيات والسياق وكيف تتوافق مع ملفك الشخصي.",
	),
	("transparency.humilityTitle", "التواضع أولاً"),
	(
		"transparency.humilityDesc",
		"لا ندعي الكمال. هذه أداة للتأمل، وليست بديلاً عن العلماء أو المجتمع.",
	),
	// Hero Section
	("hero.title", "حول الهداية القرآنية إلى حكمة عملية، شخصية لحياتك"),
	(
		"hero.subtitle",
		"مساحة هادئة ومتأنية للاتصال بالقرآن - لا زوائد، لا مقاييس أداء. فقط التأمل والعمل والنمو.",
	),
	("hero.cta", "ابدأ رحلتك"),
	("hero.explore", "استكشف السور"),
	// CTA Section
	("cta.title", "هل أنت مستعد لتحويل الهداية إلى عمل؟"),
	(
		"cta.subtitle",
		"ابدأ رحلتك الشخصية عبر القرآن. لا حاجة لبطاقة ائتمان. ابدأ التأمل اليوم.",
	),
	("cta.button", "ابدأ مجاناً"),
	// Footer
	("footer.tagline", "تحويل الحكمة القرآنية إلى إرشاد عملي"),
	// Onboarding
	("onboarding.step", "خطوة"),
	("onboarding.of", "من"),
	("onboarding.back", "رجوع"),
	("onboarding.next", "التالي"),
	("onboarding.finish", "إكمال"),
	("onboarding.step1Title", "ما هي القيم التي توجه حياتك؟"),
	("onboarding.step1Subtitle", "اختر المبادئ التي تتردد صداها معك أكثر."),
	("onboarding.step2Title", "أين أنت في الحياة الآن؟"),
	("onboarding.step2Subtitle", "هذا يساعدنا على فهم سياقك."),
	("onboarding.step3Title", "ما هي التحديات التي تواجهها؟"),
	("onboarding.step3Subtitle", "نواجه جميعًا التجارب. ما هي تجاربك؟"),
	("onboarding.step4Title", "ما هي أهدافك الروحية؟"),
	("onboarding.step4Subtitle", "ما الذي تأمل في تنميته؟"),
	("onboarding.step5Title", "كيف تتعلم بشكل أفضل؟"),
	(
		"onboarding.step5Subtitle",
		"فهم أسلوبك يساعدنا على تخصيص الرؤى.",
	),
	// Auth
	("auth.welcome", "مرحبًا بك في بصيرة قرآنية"),
	("auth.signUpTitle", "إنشاء حسابك"),
	("auth.signInTitle", "تسجيل الدخول"),
	("auth.email", "البريد الإلكتروني"),
	("auth.password", "كلمة المرور"),
	("auth.signUp", "إنشاء حساب"),
	("auth.signIn", "تسجيل الدخول"),
	("auth.haveAccount", "هل لديك حساب بالفعل؟"),
	("auth.noAccount", "ليس لديك حساب؟"),
	("auth.switchToSignIn", "تسجيل الدخول"),
	("auth.switchToSignUp", "إنشاء حساب"),
];
