// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! English strings (the authoritative key set).

pub(crate) const EN: &[(&str, &str)] = &[
	// Header
	("header.title", "Quranic Insight"),
	("header.howItWorks", "How It Works"),
	("header.features", "Features"),
	("header.explore", "Explore"),
	("header.library", "Library"),
	("header.signIn", "Sign In"),
	("header.getStarted", "Get Started"),
	// Explore
	("explore.title", "Explore Surahs"),
	("explore.subtitle", "Discover personalized insights from all 114 Surahs"),
	("explore.search", "Search by name, number, or theme..."),
	("explore.verses", "verses"),
	("explore.insights", "personalized insights"),
	("explore.exploreBtn", "Explore →"),
	// Library
	("library.title", "Your Wisdom Library"),
	(
		"library.subtitle",
		"Track your active practices, archive completed ones, and save inspiration",
	),
	("library.active", "Active"),
	("library.archived", "Archived"),
	("library.saved", "Saved"),
	(
		"library.noItems",
		"No items yet. Start exploring Surahs to add insights!",
	),
	("library.added", "Added"),
	("library.actionPlan", "Action Plan"),
	("library.what", "What:"),
	("library.when", "When:"),
	("library.frequency", "Frequency:"),
	("library.success", "Success looks like:"),
	("library.reflections", "Your Reflections"),
	("library.edit", "Edit"),
	("library.save", "Save"),
	("library.cancel", "Cancel"),
	(
		"library.noReflections",
		"No reflections yet. Click Edit to add your thoughts.",
	),
	(
		"library.notesPlaceholder",
		"How is this practice going? What have you noticed?",
	),
	// Surah Detail
	("surah.backToExplore", "Back to Explore"),
	("surah.number", "Surah"),
	("surah.verses", "verses"),
	("surah.read", "read"),
	("surah.personalizedInsights", "personalized insights"),
	("surah.keyThemes", "Key Themes"),
	("surah.revelationContext", "Revelation Context"),
	("surah.tailoredTitle", "Insights Tailored For You"),
	("surah.whyMatters", "Why This Matters to You"),
	("surah.reflectionPrompt", "Reflection Prompt"),
	("surah.addToLibrary", "Add to My Library"),
	("surah.actionTitle", "Design Your Action Plan"),
	(
		"surah.actionDesc",
		"Transform this insight into a concrete, measurable practice",
	),
	("surah.whatLabel", "What will you do?"),
	(
		"surah.whatPlaceholder",
		"E.g., When I feel anxious, I will pause and make dua before taking action...",
	),
	("surah.whenLabel", "When?"),
	("surah.whenPlaceholder", "E.g., Morning, after Fajr..."),
	("surah.frequencyLabel", "How often?"),
	("surah.frequencyPlaceholder", "E.g., Daily, weekly..."),
	("surah.metricsLabel", "How will you know it's working?"),
	(
		"surah.metricsPlaceholder",
		"E.g., I feel calmer, my relationships improve, I sleep better...",
	),
	("surah.saveLibrary", "Save to Library"),
	// How It Works
	("how.title", "How It Works"),
	("how.subtitle", "A calm, deliberate process from insight to implementation"),
	("how.step1Title", "Share Your Context"),
	(
		"how.step1Desc",
		"Tell us about your values, life stage, challenges, and spiritual goals through a thoughtful quiz.",
	),
	("how.step2Title", "Receive Insights"),
	(
		"how.step2Desc",
		"Get personalized Quranic wisdom with ayah references, translations, and context tailored to your life.",
	),
	("how.step3Title", "Design Your Action"),
	(
		"how.step3Desc",
		"Transform insights into concrete action plans with what, when, how, and success metrics you define.",
	),
	("how.step4Title", "Reflect & Grow"),
	(
		"how.step4Desc",
		"Journal your experiences, track reflections, and let the wisdom deepen over time.",
	),
	// Features
	("features.title", "Core Features"),
	(
		"features.subtitle",
		"Everything you need to transform Quranic wisdom into lived practice",
	),
	("features.surahTitle", "Surah Exploration"),
	(
		"features.surahDesc",
		"Browse all 114 Surahs with Makki/Madani context, themes, and revelation background. See estimated reading time and personalized insight counts.",
	),
	("features.insightTitle", "Personalized Insights"),
	(
		"features.insightDesc",
		"AI-powered analysis connects Quranic verses to your life context. Each insight includes ayah reference, Arabic text, translation, and relevance.",
	),
	("features.libraryTitle", "Your Wisdom Library"),
	(
		"features.libraryDesc",
		"Organize insights into Active, Archived, and Saved. Add notes, life area tags, and implementation designs. Your spiritual growth, tracked.",
	),
	("features.reflectionTitle", "Reflection Prompts"),
	(
		"features.reflectionDesc",
		"Daily and weekly prompts help you pause, contemplate, and journal. Rich-text editor for deep reflection on how insights manifest.",
	),
	("features.reminderTitle", "Smart Reminders"),
	(
		"features.reminderDesc",
		"Calendar integration and notification hooks (WhatsApp, Telegram) keep insights active. Focus Mode for distraction-free contemplation.",
	),
	("features.searchTitle", "Discovery & Search"),
	(
		"features.searchDesc",
		"Find wisdom by theme, life situation, Surah, or ayah. Filter by active/archived status. Surface the guidance you need, when you need it.",
	),
	// Transparency
	("transparency.title", "Trust & Transparency"),
	(
		"transparency.subtitle",
		"Built with honesty and reverence for the sacred text",
	),
	("transparency.scholarTitle", "Scholar-Backed AI"),
	(
		"transparency.scholarDesc",
		"Our AI is trained on verified Quranic translations and classical tafsir. Every insight references authentic sources.",
	),
	("transparency.metricsTitle", "No Performative Metrics"),
	(
		"transparency.metricsDesc",
		"No likes, no streaks, no public leaderboards. Your spiritual journey is between you and Allah.",
	),
	("transparency.processTitle", "Transparent Process"),
	(
		"transparency.processDesc",
		"See exactly how insights are generated—ayah references, context, and how they map to your profile.",
	),
	("transparency.humilityTitle", "Humility First"),
	(
		"transparency.humilityDesc",
		"We don't claim perfection. This is a tool for reflection, not a replacement for scholars or community.",
	),
	// Hero Section
	(
		"hero.title",
		"Turn Quranic guidance into actionable wisdom, personalized for your life",
	),
	(
		"hero.subtitle",
		"A calm, deliberate space to connect with the Quran—no fluff, no performative metrics. Just reflection, action, and growth.",
	),
	("hero.cta", "Begin Your Journey"),
	("hero.explore", "Explore Surahs"),
	// CTA Section
	("cta.title", "Ready to transform guidance into action?"),
	(
		"cta.subtitle",
		"Begin your personalized journey through the Quran. No credit card required. Start reflecting today.",
	),
	("cta.button", "Get Started Free"),
	// Footer
	("footer.tagline", "Transforming Quranic wisdom into actionable guidance"),
	// Onboarding
	("onboarding.step", "Step"),
	("onboarding.of", "of"),
	("onboarding.back", "Back"),
	("onboarding.next", "Next"),
	("onboarding.finish", "Complete"),
	("onboarding.step1Title", "What values guide your life?"),
	(
		"onboarding.step1Subtitle",
		"Select the principles that resonate most with you.",
	),
	("onboarding.step2Title", "Where are you in life right now?"),
	("onboarding.step2Subtitle", "This helps us understand your context."),
	("onboarding.step3Title", "What challenges are you navigating?"),
	("onboarding.step3Subtitle", "We all face trials. What are yours?"),
	("onboarding.step4Title", "What are your spiritual goals?"),
	("onboarding.step4Subtitle", "What do you hope to cultivate?"),
	("onboarding.step5Title", "How do you learn best?"),
	(
		"onboarding.step5Subtitle",
		"Understanding your style helps us personalize insights.",
	),
	// Auth
	("auth.welcome", "Welcome to Quranic Insight"),
	("auth.signUpTitle", "Create Your Account"),
	("auth.signInTitle", "Sign In"),
	("auth.email", "Email"),
	("auth.password", "Password"),
	("auth.signUp", "Sign Up"),
	("auth.signIn", "Sign In"),
	("auth.haveAccount", "Already have an account?"),
	("auth.noAccount", "Don't have an account?"),
	("auth.switchToSignIn", "Sign in"),
	("auth.switchToSignUp", "Sign up"),
];
