// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Urdu strings.

pub(crate) const UR: &[(&str, &str)] = &[
	// Header
	("header.title", "قرآنی بصیرت"),
	("header.howItWorks", "یہ کیسے کام کرتا ہے"),
	("header.features", "خصوصیات"),
	("header.explore", "دریافت کریں"),
	("header.library", "میری لائبریری"),
	("header.signIn", "سائن ان"),
	("header.getStarted", "شروع کریں"),
	// Explore
	("explore.title", "سورتیں دریافت کریں"),
	("explore.subtitle", "تمام 114 سورتوں سے ذاتی بصیرتیں دریافت کریں"),
	("explore.search", "نام، نمبر یا موضوع سے تلاش کریں..."),
	("explore.verses", "آیات"),
	("explore.insights", "ذاتی بصیرتیں"),
	("explore.exploreBtn", "دریافت کریں ←"),
	// Library
	("library.title", "آپ کی حکمت کی لائبریری"),
	(
		"library.subtitle",
		"اپنی فعال مشقوں کو ٹریک کریں، مکمل شدہ کو محفوظ کریں، اور الہام محفوظ کریں",
	),
	("library.active", "فعال"),
	("library.archived", "محفوظ شدہ"),
	("library.saved", "محفوظ کردہ"),
	(
		"library.noItems",
		"ابھی تک کوئی آئٹمز نہیں۔ بصیرتیں شامل کرنے کے لیے سورتیں دریافت کرنا شروع کریں!",
	),
	("library.added", "شامل کیا گیا"),
	("library.actionPlan", "ایکشن پلان"),
	("library.what", "کیا:"),
	("library.when", "کب:"),
	("library.frequency", "تعدد:"),
	("library.success", "کامیابی اس طرح نظر آتی ہے:"),
	("library.reflections", "آپ کے خیالات"),
	("library.edit", "ترمیم"),
	("library.save", "محفوظ کریں"),
	("library.cancel", "منسوخ"),
	(
		"library.noReflections",
		"ابھی تک کوئی خیالات نہیں۔ اپنے خیالات شامل کرنے کے لیے ترمیم پر کلک کریں۔",
	),
	(
		"library.notesPlaceholder",
		"یہ عمل کیسا چل رہا ہے؟ آپ نے کیا محسوس کیا؟",
	),
	// Surah Detail
	("surah.backToExplore", "دریافت کی طرف واپس"),
	("surah.number", "سورہ"),
	("surah.verses", "آیات"),
	("surah.read", "پڑھیں"),
	("surah.personalizedInsights", "ذاتی بصیرتیں"),
	("surah.keyThemes", "اہم موضوعات"),
	("surah.revelationContext", "نزول کا سیاق و سباق"),
	("surah.tailoredTitle", "آپ کے لیے تیار کردہ بصیرتیں"),
	("surah.whyMatters", "یہ آپ کے لیے کیوں اہم ہے"),
	("surah.reflectionPrompt", "غور و فکر کا اشارہ"),
	("surah.addToLibrary", "میری لائبریری میں شامل کریں"),
	("surah.actionTitle", "اپنا ایکشن پلان ڈیزائن کریں"),
	(
		"surah.actionDesc",
		"اس بصیرت کو ٹھوس، قابل پیمائش عمل میں تبدیل کریں",
	),
	("surah.whatLabel", "آپ کیا کریں گے؟"),
	(
		"surah.whatPlaceholder",
		"مثال: جب میں پریشان محسوس کروں، میں کوئی بھی اقدام کرنے سے پہلے رک کر دعا کروں گا...",
	),
	("surah.whenLabel", "کب؟"),
	("surah.whenPlaceholder", "مثال: صبح، فجر کے بعد..."),
	("surah.frequencyLabel", "کتنی بار؟"),
	("surah.frequencyPlaceholder", "مثال: روزانہ، ہفتہ وار..."),
	("surah.metricsLabel", "آپ کو کیسے پتہ چلے گا کہ یہ کام کر رہا ہے؟"),
	(
		"surah.metricsPlaceholder",
		"مثال: میں پرسکون محسوس کرتا ہوں، میرے تعلقات بہتر ہوتے ہیں، میں بہتر سوتا ہوں...",
	),
	("surah.saveLibrary", "لائبریری میں محفوظ کریں"),
	// How It Works
	("how.title", "یہ کیسے کام کرتا ہے"),
	(
		"how.subtitle",
		"بصیرت سے عمل درآمد تک ایک پرسکون، سوچا سمجھا عمل",
	),
	("how.step1Title", "اپنا سیاق و سباق شیئر کریں"),
	(
		"how.step1Desc",
		"ایک سوچے سمجھے کوئز کے ذریعے ہمیں اپنی اقدار، زندگی کے مرحلے، چیلنجز اور روحانی اہداف کے بارے میں بتائیں۔",
	),
	("how.step2Title", "بصیرتیں حاصل کریں"),
	(
		"how.step2Desc",
		"آیات کے حوالوں، ترجموں اور آپ کی زندگی کے مطابق سیاق و سباق کے ساتھ ذاتی نوعیت کی قرآنی حکمت حاصل کریں۔",
	),
	("how.step3Title", "اپنا عمل ڈیزائن کریں"),
	(
		"how.step3Desc",
		"بصیرتوں کو ٹھوس ایکشن پلانز میں تبدیل کریں جس میں کیا، کب، کیسے اور کامیابی کے پیمانے شامل ہیں جو آپ طے کرتے ہیں۔",
	),
	("how.step4Title", "غور کریں اور بڑھیں"),
	(
		"how.step4Desc",
		"اپنے تجربات کو نوٹ کریں، خیالات کو ٹریک کریں، اور حکمت کو وقت کے ساتھ گہرا ہونے دیں۔",
	),
	// Features
	("features.title", "بنیادی خصوصیات"),
	(
		"features.subtitle",
		"قرآنی حکمت کو زندہ عمل میں تبدیل کرنے کے لیے وہ سب کچھ جس کی آپ کو ضرورت ہے",
	),
	("features.surahTitle", "سورہ کی تلاش"),
	(
		"features.surahDesc",
		"مکی/مدنی سیاق و سباق، موضوعات، اور نزول کی پس منظر کے ساتھ تمام 114 سورتوں کو براؤز کریں۔ تخمینی پڑھنے کا وقت اور ذاتی بصیرتوں کی تعداد دیکھیں۔",
	),
	("features.insightTitle", "ذاتی بصیرتیں"),
	(
		"features.insightDesc",
		"AI سے چلنے والا تجزیہ قرآنی آیات کو آپ کی زندگی کے سیاق و سباق سے جوڑتا ہے۔ ہر بصیرت میں آیت کا حوالہ، عربی متن، ترجمہ اور مطابقت شامل ہے۔",
	),
	("features.libraryTitle", "آپ کی حکمت کی لائبریری"),
	(
		"features.libraryDesc",
		"بصیرتوں کو فعال، محفوظ شدہ اور محفوظ کردہ میں منظم کریں۔ نوٹس، زندگی کے شعبوں کے ٹیگز، اور نفاذ کے ڈیزائن شامل کریں۔ آپ کی روحانی ترقی، ٹریک شدہ۔",
	),
	("features.reflectionTitle", "غور و فکر کے اشارے"),
	(
		"features.reflectionDesc",
		"روزانہ اور ہفتہ وار اشارے آپ کو رکنے، سوچنے اور نوٹ کرنے میں مدد کرتے ہیں۔ بصیرتوں کے ظاہر ہونے کی گہری عکاسی کے لیے رچ ٹیکسٹ ایڈیٹر۔",
	),
	("features.reminderTitle", "سمارٹ یاددہانیاں"),
	(
		"features.reminderDesc",
		"کیلنڈر کا انضمام اور اطلاع کے ہکس (واٹس ایپ، ٹیلیگرام) بصیرتوں کو فعال رکھتے ہیں۔ بغیر خلل کے غور و فکر کے لیے فوکس موڈ۔",
	),
	("features.searchTitle", "دریافت اور تلاش"),
	(
		"features.searchDesc",
		"موضوع، زندگی کی صورتحال، سورہ، یا آیت کے ذریعے حکمت تلاش کریں۔ فعال/محفوظ شدہ حیثیت کے لحاظ سے فلٹر کریں۔ جب آپ کو ضرورت ہو، رہنمائی کو سامنے لائیں۔",
	),
	// Transparency
	("transparency.title", "اعتماد اور شفافیت"),
	(
		"transparency.subtitle",
		"مقدس متن کے لیے ایمانداری اور احترام کے ساتھ بنایا گیا",
	),
	("transparency.scholarTitle", "علماء کی حمایت یافتہ AI"),
	(
		"transparency.scholarDesc",
		"ہماری AI تصدیق شدہ قرآنی تراجم اور کلاسیکی تفسیر پر تربیت یافتہ ہے۔ ہر بصیرت مستند ذرائع کا حوالہ دیتی ہے۔",
	),
	("transparency.metricsTitle", "کوئی کارکردگی کی پیمائشیں نہیں"),
	(
		"transparency.metricsDesc",
		"کوئی لائکس نہیں، کوئی سلسلے نہیں، کوئی عوامی لیڈر بورڈز نہیں۔ آپ کا روحانی سفر آپ اور اللہ کے درمیان ہے۔",
	),
	("transparency.processTitle", "شفاف عمل"),
	(
		"transparency.processDesc",
		"بالکل دیکھیں کہ بصیرتیں کیسے بنائی جاتی ہیں - آیت کے حوالے، سیاق و سباق، اور وہ آپ کے پروفائل سے کیسے میل کھاتے ہیں۔",
	),
	("transparency.humilityTitle", "عاجزی پہلے"),
	(
		"transparency.humilityDesc",
		"ہم کمال کا دعویٰ نہیں کرتے۔ یہ غور و فکر کا ایک آلہ ہے، علماء یا برادری کا متبادل نہیں۔",
	),
	// Hero Section
	(
		"hero.title",
		"قرآنی رہنمائی کو قابل عمل حکمت میں تبدیل کریں، آپ کی زندگی کے لیے ذاتی نوعیت کی",
	),
	(
		"hero.subtitle",
		"قرآن سے جڑنے کے لیے ایک پرسکون، سوچا سمجھا مقام - کوئی فضول چیز نہیں، کوئی کارکردگی کی پیمائش نہیں۔ صرف غور و فکر، عمل اور ترقی۔",
	),
	("hero.cta", "اپنا سفر شروع کریں"),
	("hero.explore", "سورتیں دریافت کریں"),
	// CTA Section
	("cta.title", "رہنمائی کو عمل میں تبدیل کرنے کے لیے تیار ہیں؟"),
	(
		"cta.subtitle",
		"قرآن کے ذریعے اپنا ذاتی سفر شروع کریں۔ کریڈٹ کارڈ کی ضرورت نہیں۔ آج ہی غور و فکر شروع کریں۔",
	),
	("cta.button", "مفت شروع کریں"),
	// Footer
	("footer.tagline", "قرآنی حکمت کو قابل عمل رہنمائی میں تبدیل کرنا"),
	// Onboarding
	("onboarding.step", "قدم"),
	("onboarding.of", "میں سے"),
	("onboarding.back", "واپس"),
	("onboarding.next", "اگلا"),
	("onboarding.finish", "مکمل"),
	("onboarding.step1Title", "آپ کی زندگی کو کون سی اقدار رہنمائی کرتی ہیں؟"),
	(
		"onboarding.step1Subtitle",
		"وہ اصول منتخب کریں جو آپ کے ساتھ سب سے زیادہ گونجتے ہیں۔",
	),
	("onboarding.step2Title", "آپ ابھی زندگی میں کہاں ہیں؟"),
	(
		"onboarding.step2Subtitle",
		"یہ ہمیں آپ کا سیاق و سباق سمجھنے میں مدد کرتا ہے۔",
	),
	("onboarding.step3Title", "آپ کن چیلنجز کا سامنا کر رہے ہیں؟"),
	(
		"onboarding.step3Subtitle",
		"ہم سب آزمائشوں کا سامنا کرتے ہیں۔ آپ کے کیا ہیں؟",
	),
	("onboarding.step4Title", "آپ کے روحانی اہداف کیا ہیں؟"),
	("onboarding.step4Subtitle", "آپ کیا پیدا کرنے کی امید رکھتے ہیں؟"),
	("onboarding.step5Title", "آپ بہترین طریقے سے کیسے سیکھتے ہیں؟"),
	(
		"onboarding.step5Subtitle",
		"آپ کے انداز کو سمجھنا ہمیں بصیرتوں کو ذاتی نوعیت دینے میں مدد کرتا ہے۔",
	),
	// Auth
	("auth.welcome", "قرآنی بصیرت میں خوش آمدید"),
	("auth.signUpTitle", "اپنا اکاؤنٹ بنائیں"),
	("auth.signInTitle", "سائن ان"),
	("auth.email", "ای میل"),
	("auth.password", "پاس ورڈ"),
	("auth.signUp", "سائن اپ"),
	("auth.signIn", "سائن ان"),
	("auth.haveAccount", "پہلے سے اکاؤنٹ ہے؟"),
	("auth.noAccount", "اکاؤنٹ نہیں ہے؟"),
	("auth.switchToSignIn", "سائن ان"),
	("auth.switchToSignUp", "سائن اپ"),
];
